//! SSP0/SSP1 blocks

use lpc32x0_core::report::FieldReport;
use lpc32x0_core::{Access, RegisterDescriptor, RegisterSet};

fn not_if(cond: bool) -> &'static str {
    if cond {
        "not "
    } else {
        ""
    }
}

fn en(field: u32) -> &'static str {
    if field == 0 {
        "dis"
    } else {
        "en"
    }
}

fn cr0(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 15, 8, "SCR - serial clock rate = HCLK / (CPSDVSR x (SCR+1))", |f| f.to_string());
    r.field(val, 7, 7, "CPHA - clock out phase - this bit is only used in SPI mode", |f| {
        format!(
            "SSP captures serial data on the {} clock transition of the frame",
            if f == 0 { "first" } else { "second" }
        )
    });
    r.field(val, 6, 6, "CPOL - clock out polarity - this bit is only used in SPI mode", |f| {
        format!(
            "SSP controller maintains the bus clock {} between frames",
            if f == 0 { "low" } else { "high" }
        )
    });
    r.field(val, 5, 4, "FRF - frame format", |f| {
        match f {
            0 => "SPI",
            1 => "TI",
            2 => "Microwire",
            _ => "- not supported -",
        }
        .into()
    });
    r.field(val, 3, 0, "DSS - data size select - number of bits transferred in each frame", |f| {
        if f < 3 {
            "- not supported -".into()
        } else {
            format!("{} bit transfer", f + 1)
        }
    });
    r.finish()
}

fn cr1(val: u32) -> String {
    let slave = val & 0x4 != 0;
    let mut r = FieldReport::new();
    r.field(val, 3, 3, "SOD - slave output disable", |f| {
        match (slave, f) {
            (false, _) => "only relevant when bit 2 (MS) == 1",
            (true, 1) => "block the SSP controller from driving MISO",
            (true, _) => "allow SSP to drive MISO",
        }
        .into()
    });
    r.field(val, 2, 2, "MS - master/slave mode (can only be written when SSE == 0)", |f| {
        if f == 0 {
            "SSP is master; drives SCLK, MOSI, and SSEL, receives on MISO".into()
        } else {
            "SSP is slave; drives MISO, and receives on SCLK, MOSI, and SSEL".into()
        }
    });
    r.field(val, 1, 1, "SSE - SSP enable", |f| format!("SSP is {}abled", en(f)));
    r.field(val, 0, 0, "LBM - loop back mode", |f| {
        if f == 0 {
            "normal operation".into()
        } else {
            "loop-back mode".into()
        }
    });
    r.finish()
}

fn status(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 4, 4, "BSY", |f| format!("{}busy", not_if(f == 0)));
    r.field(val, 3, 3, "RFF", |f| format!("receive FIFO {}full", not_if(f == 0)));
    r.field(val, 2, 2, "RNE", |f| format!("receive FIFO {}empty", not_if(f == 1)));
    r.field(val, 1, 1, "TNF", |f| format!("transmit FIFO {}full", not_if(f == 1)));
    r.field(val, 0, 0, "TFE", |f| format!("transmit FIFO {}empty", not_if(f == 0)));
    r.finish()
}

fn cpsr(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 7, 0, "clock prescale", |f| f.to_string());
    r.finish()
}

fn imsc(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 3, 3, "TXIM - interrupt when the Tx FIFO is at least half empty", |f| {
        format!("{}abled", en(f))
    });
    r.field(val, 2, 2, "RXIM - interrupt when the Rx FIFO is at least half full", |f| {
        format!("{}abled", en(f))
    });
    r.field(val, 1, 1, "RTIM - receive timeout interrupt", |f| format!("{}abled", en(f)));
    r.field(val, 0, 0, "RORIM - receive overrun interrupt", |f| format!("{}abled", en(f)));
    r.finish()
}

fn raw_status(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 3, 3, "TXRIS", |f| {
        format!("Tx FIFO is {}at least half empty", not_if(f == 0))
    });
    r.field(val, 2, 2, "RXRIS", |f| {
        format!("Rx FIFO is {}at least half full", not_if(f == 0))
    });
    r.field(val, 1, 1, "RTRIS", |f| {
        format!(
            "Rx FIFO is {}empty and has not been read for a timeout period",
            not_if(f == 1)
        )
    });
    r.field(val, 0, 0, "RORRIS", |f| {
        format!(
            "another frame was {}completely received while the Rx FIFO was full",
            not_if(f == 0)
        )
    });
    r.finish()
}

fn masked_status(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 3, 3, "TXMIS", |f| {
        format!("the Tx FIFO is {}at least half empty", not_if(f == 0))
    });
    r.field(val, 2, 2, "RXMIS", |f| {
        format!("the Rx FIFO is {}at least half full", not_if(f == 0))
    });
    r.field(val, 1, 1, "RTMIS", |f| format!("the Rx FIFO is {}empty", not_if(f == 1)));
    r.field(val, 0, 0, "RORMIS", |f| {
        format!(
            "another frame was {}completely received while the Rx FIFO was full",
            not_if(f == 0)
        )
    });
    r.finish()
}

fn dma_control(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 1, 1, "TXDMAE", |f| {
        format!("DMA for the transmit FIFO is {}abled", en(f))
    });
    r.field(val, 0, 0, "RXDMAE", |f| {
        format!("DMA for the receive FIFO is {}abled", en(f))
    });
    r.finish()
}

/// SSP register set
pub fn registers() -> RegisterSet {
    use Access as A;
    let r = RegisterDescriptor::new;

    RegisterSet::new(
        "ssp",
        vec![
            // Decoded under clkpwr
            r(0x4000_4078, 0, "SSP_CTRL", "SSP0/1 clock control", A::RW),
            r(0x2008_4000, 0, "SSP0CR0", "SSP0 control 0", A::RW).with_decoder(cr0),
            r(0x2008_C000, 0, "SSP1CR0", "SSP1 control 0", A::RW).with_decoder(cr0),
            r(0x2008_4004, 0, "SSP0CR1", "SSP0 control 1", A::RW).with_decoder(cr1),
            r(0x2008_C004, 0, "SSP1CR1", "SSP1 control 1", A::RW).with_decoder(cr1),
            r(0x2008_4008, 0, "SSP0DR", "SSP0 data", A::WRITE),
            r(0x2008_C008, 0, "SSP1DR", "SSP1 data", A::WRITE),
            r(0x2008_400C, 0, "SSP0SR", "SSP0 status", A::READ).with_decoder(status),
            r(0x2008_C00C, 0, "SSP1SR", "SSP1 status", A::READ).with_decoder(status),
            r(0x2008_4010, 0, "SSP0CPSR", "SSP0 clock prescale", A::RW).with_decoder(cpsr),
            r(0x2008_C010, 0, "SSP1CPSR", "SSP1 clock prescale", A::RW).with_decoder(cpsr),
            r(0x2008_4014, 0, "SSP0IMSC", "SSP0 interrupt mask set and clear", A::RW)
                .with_decoder(imsc),
            r(0x2008_C014, 0, "SSP1IMSC", "SSP1 interrupt mask set and clear", A::RW)
                .with_decoder(imsc),
            r(0x2008_4018, 0, "SSP0RIS", "SSP0 raw interrupt status", A::READ)
                .with_decoder(raw_status),
            r(0x2008_C018, 0, "SSP1RIS", "SSP1 raw interrupt status", A::READ)
                .with_decoder(raw_status),
            r(0x2008_401C, 0, "SSP0MIS", "SSP0 masked interrupt status", A::READ)
                .with_decoder(masked_status),
            r(0x2008_C01C, 0, "SSP1MIS", "SSP1 masked interrupt status", A::READ)
                .with_decoder(masked_status),
            r(0x2008_4020, 0, "SSP0ICR", "SSP0 interrupt clear", A::WRITE),
            r(0x2008_C020, 0, "SSP1ICR", "SSP1 interrupt clear", A::WRITE),
            r(0x2008_4024, 0, "SSP0DMACR", "SSP0 DMA control", A::RW).with_decoder(dma_control),
            r(0x2008_C024, 0, "SSP1DMACR", "SSP1 DMA control", A::RW).with_decoder(dma_control),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cr0_spi_8bit() {
        let text = cr0(0x0000_0007);
        assert!(text.contains("SPI\n"));
        assert!(text.contains("8 bit transfer"));
    }

    #[test]
    fn test_status_idle() {
        // TFE=1, TNF=1: transmit FIFO empty and not full
        let text = status(0x03);
        assert!(text.contains("not busy"));
        assert!(text.contains("transmit FIFO not full"));
        assert!(text.contains("transmit FIFO empty"));
        assert!(text.contains("receive FIFO empty"));
    }

    #[test]
    fn test_data_registers_not_readable() {
        let set = registers();
        assert_eq!(set.len(), 21);
        for reg in set.registers.iter().filter(|r| r.name.ends_with("DR")) {
            assert!(!reg.access.readable(), "{} should be write-only", reg.name);
        }
    }
}
