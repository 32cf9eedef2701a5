//! SPI1/SPI2 blocks

use lpc32x0_core::report::{blank, FieldReport};
use lpc32x0_core::{Access, RegisterDescriptor, RegisterSet};

fn en(field: u32) -> &'static str {
    if field == 0 {
        "dis"
    } else {
        "en"
    }
}

fn global(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 1, 1, "rst", |f| {
        if f == 0 {
            "no action".into()
        } else {
            "SPI interface is reset".into()
        }
    });
    r.field(val, 0, 0, "enable", |f| {
        format!("SPIn interface is {}abled", en(f))
    });
    r.finish()
}

fn control(val: u32) -> String {
    let transmit = val & 0x0000_8000 != 0;
    let mut r = FieldReport::new();

    r.field(val, 23, 23, "selects bidirectional or unidirectional usage of the SPIn_DATIO pin", |f| {
        format!("SPIn_DATIO pin is {}directional", if f == 0 { "bi" } else { "uni" })
    });
    r.field(val, 22, 22, "busy halt, determines whether SPIn_BUSY affects SPI operation", |f| {
        if f == 1 {
            "data xfer is halted if SPIn_BUSY is active during master operation".into()
        } else {
            "the SPIn_BUSY pin is ignored during master operation".into()
        }
    });
    r.field(val, 21, 21, "busy polarity - controls the polarity of the SPIn_BUSY signal", |f| {
        format!("SPIn_BUSY is active {}", if f == 0 { "LOW" } else { "HIGH" })
    });
    r.field(val, 20, 20, "(reserved)", blank);
    r.field(val, 19, 19, "endian - controls the order in which the bits are transfered", |f| {
        format!("data is xfered {}-first", if f == 0 { "MSB" } else { "LSB" })
    });
    r.field(val, 18, 18, "(reserved)", blank);
    r.field(val, 17, 16, "SPI mode selection", |f| {
        match f {
            0 => "SPI mode 0: clock starts low, data is sampled at the clock rising edge",
            1 => "SPI mode 1: clock starts low, data is sampled at the clock falling edge",
            2 => "SPI mode 2: clock starts high, data is sampled at the clock falling edge",
            _ => "SPI mode 3: clock starts high, data is sampled at the clock rising edge",
        }
        .into()
    });
    r.field(val, 15, 15, "rxtx - controls the direction of data transfer", |f| {
        if f == 0 {
            "data is shifted into the SPI (receive)".into()
        } else {
            "data is shifted out of the SPI (transmit)".into()
        }
    });
    r.field(val, 14, 14, "thr - controls the FIFO threshold, determines operation of interrupt flag", |f| {
        match (transmit, f) {
            (true, 0) => "the FIFO threshold is disabled",
            (true, _) => "the FIFO threshold is enabled, threshold=8 entries in FIFO",
            (false, 0) => "the FIFO threshold is disabled; threshold=1 entry in FIFO",
            (false, _) => "the FIFO threshold is enabled; threshold=56 entries in FIFO",
        }
        .into()
    });
    r.field(val, 13, 13, "shift_off - controls generation of clock pulses on SPIn_CLK", |f| {
        format!("{}ables the generation of clock pulses on SPIn_CLK", if f == 0 { "en" } else { "dis" })
    });
    r.field(val, 12, 9, "bitnum - defines the number of bits to xmit or rcve in one block xfer", |f| {
        format!("{} bits", f + 1)
    });
    r.field(val, 8, 8, "(reserved)", blank);
    r.field(val, 7, 7, "master", |f| {
        if f == 0 {
            "not supported".into()
        } else {
            "SPI is operating as master".into()
        }
    });
    r.field(val, 6, 0, "rate - SPI transfer rate - SPIn_CLK = HCLK / ((rate+1) x 2)", |f| {
        format!("value: {}", f)
    });
    r.finish()
}

fn frame_count(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 15, 0, "spif - SPI frame count; the number of frames xfered", |f| {
        format!("{} frame(s)", f)
    });
    r.finish()
}

fn interrupt_enable(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 1, 1, "inteot - end of transfer interrupt", |f| {
        format!("end of transfer interrupt is {}abled", en(f))
    });
    r.field(val, 0, 0, "intthr - FIFO threshold interrupt enable", |f| {
        format!("the FIFO threshold interrupt is {}abled", en(f))
    });
    r.finish()
}

fn status(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 8, 8, "intclr - SPI interrupt clear", blank);
    r.field(val, 7, 7, "eot - end of transfer interrupt", blank);
    r.field(val, 6, 6, "busylev - SPIn_BUSY level", blank);
    r.field(val, 5, 4, "(reserved)", blank);
    r.field(val, 3, 3, "shiftact - shift active; indicates when the SPI is transferring data", blank);
    r.field(val, 2, 2, "bf - FIFO full interrupt flag", blank);
    r.field(val, 1, 1, "thr - FIFO threshold interrupt flag", |f| {
        if f == 0 {
            "if rxtx==0: FIFO is below threshold; if rxtx==1: FIFO is above threshold".into()
        } else {
            "if rxtx==0: FIFO is at or above threshold; if rxtx==1: FIFO is at or below threshold".into()
        }
    });
    r.field(val, 0, 0, "be - FIFO empty interrupt flag", |f| {
        format!("FIFO is {}empty", if f == 0 { "not " } else { "" })
    });
    r.finish()
}

fn timer_control(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 2, 2, "tirqe - timed interrupt enable", |f| {
        format!("timed interrupt is {}abled", en(f))
    });
    r.field(val, 1, 1, "pirqe - peripheral interrupt enable", |f| {
        format!("SPI status interrupt input {}abled", en(f))
    });
    r.field(val, 0, 0, "mode - determines how the timer is used", |f| {
        if f == 0 {
            "timed interrupt mode".into()
        } else {
            "DMA time-out mode".into()
        }
    });
    r.finish()
}

fn timer_count(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 15, 0, "count", |f| f.to_string());
    r.finish()
}

fn timer_status(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 15, 15, "tirqstat - timed interrupt status flag, write 1 to clear flag", |f| {
        format!("{}timed interrupt pending", if f == 0 { "no " } else { "" })
    });
    r.finish()
}

/// SPI register set
pub fn registers() -> RegisterSet {
    use Access as A;
    let r = RegisterDescriptor::new;

    RegisterSet::new(
        "spi",
        vec![
            // Also listed (and decoded) in clkpwr
            r(0x4000_40C4, 0, "SPI_CTRL", "SPI1 and SPI2 clock and pin control", A::RW),
            r(0x2008_8000, 0, "SPI1_GLOBAL", "SPI1 global control", A::RW).with_decoder(global),
            r(0x2009_0000, 0, "SPI2_GLOBAL", "SPI2 global control", A::RW).with_decoder(global),
            r(0x2008_8004, 0x0000_0E08, "SPI1_CON", "SPI1 control", A::RW).with_decoder(control),
            r(0x2009_0004, 0x0000_0E08, "SPI2_CON", "SPI2 control", A::RW).with_decoder(control),
            r(0x2008_8008, 0, "SPI1_FRM", "SPI1 frame count", A::RW).with_decoder(frame_count),
            r(0x2009_0008, 0, "SPI2_FRM", "SPI2 frame count", A::RW).with_decoder(frame_count),
            r(0x2008_800C, 0, "SPI1_IER", "SPI1 interrupt enable", A::RW)
                .with_decoder(interrupt_enable),
            r(0x2009_000C, 0, "SPI2_IER", "SPI2 interrupt enable", A::RW)
                .with_decoder(interrupt_enable),
            r(0x2008_8010, 0x0000_0001, "SPI1_STAT", "SPI1 status", A::RW).with_decoder(status),
            r(0x2009_0010, 0x0000_0001, "SPI2_STAT", "SPI2 status", A::RW).with_decoder(status),
            r(0x2008_8014, 0, "SPI1_DAT", "SPI1 data", A::RW),
            r(0x2009_0014, 0, "SPI2_DAT", "SPI2 data", A::RW),
            r(0x2008_8400, 0x0000_0002, "SPI1_TIM_CTRL", "SPI1 timer control", A::RW)
                .with_decoder(timer_control),
            r(0x2009_0400, 0x0000_0002, "SPI2_TIM_CTRL", "SPI2 timer control", A::RW)
                .with_decoder(timer_control),
            r(0x2008_8404, 0, "SPI1_TIM_COUNT", "SPI1 timer count", A::RW)
                .with_decoder(timer_count),
            r(0x2009_0404, 0, "SPI2_TIM_COUNT", "SPI2 timer count", A::RW)
                .with_decoder(timer_count),
            r(0x2008_8408, 0, "SPI1_TIM_STAT", "SPI1 timer status", A::RW)
                .with_decoder(timer_status),
            r(0x2009_0408, 0, "SPI2_TIM_STAT", "SPI2 timer status", A::RW)
                .with_decoder(timer_status),
        ],
    )
}
