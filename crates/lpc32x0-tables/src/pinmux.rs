//! Pin multiplexing

use lpc32x0_core::report::{blank, FieldReport};
use lpc32x0_core::{Access, RegisterDescriptor, RegisterSet};

/// One mux bit: pin label, function when 0, function when 1, trailing note
type MuxBit = (u32, &'static str, &'static str, &'static str, &'static str);

/// P_MUX_STATE bits (reserved ranges are rendered separately)
const PERIPH_MUX: &[MuxBit] = &[
    (15, "U7_TX / MAT1.1 | LCDVD[11]", "U7_TX", "MAT1.1", ", unless LCD is enabled in which case LCDVD[11]"),
    (12, "SPI1_CLK / SCK0", "SPI1_CLK", "SCK0", ""),
    (10, "SPI1_DATIN / MISO0 / MCFB2", "SPI1_DATIN", "MISO0, unless TIMCLK_CTRL1[6] == 1", ""),
    (9, "SPI1_DATIO / MOSI0 / MCFB1", "SPI1_DATIO", "MOSI0, unless TIMCLK_CTRL1[6] == 1", ""),
    (8, "SPI2_CLK / SCK1 | LCDVD[23]", "SPI2_CLK", "SCK1", ", unless LCD is enabled in which case LCDVD[23]"),
    (6, "SPI2_DATIN / MISO1 | LCDVD[21]", "SPI2_DATIN", "MISO1", ", unless LCD is enabled in which case LCDVD[21]"),
    (5, "SPI2_DATIO / MOSI1 | LCDVD[20]", "SPI2_DATIO", "MOSI1", ", unless LCD is enabled in which case LCDVD[20]"),
    (4, "I2S1TX_WS / CAP3.0", "I2S1TX_WS", "CAP3.0", ""),
    (3, "I2S1TX_CLK / MAT3.0", "I2S1TX_CLK", "MAT3.0", ""),
    (2, "I2S1TX_SDA / MAT3.1", "I2S1TX_SDA", "MAT3.1", ""),
];

const P0_MUX: &[MuxBit] = &[
    (7, "P0.7 / I2S0TX_WS | LCDVD[13]", "P0.7", "I2S0TX_WS", ", unless LCD is enabled in which case LCDVD[13]"),
    (6, "P0.6 / I2S0TX_CLK | LCDVD[12]", "P0.6", "I2S0TX_CLK", ", unless LCD is enabled in which case LCDVD[12]"),
    (5, "P0.5 / I2S0TX_SDA | LCDVD[7]", "P0.5", "I2S0TX_SDA", ", unless LCD is enabled in which case LCDVD[7]"),
    (4, "P0.4 / I2S0RX_WS | LCDVD[6]", "P0.4", "I2S0RX_WS", ", unless LCD is enabled in which case LCDVD[6]"),
    (3, "P0.3 / I2S0RX_CLK | LCDVD[5]", "P0.3", "I2S0RX_CLK", ", unless LCD is enabled in which case LCDVD[5]"),
    (2, "P0.2 / I2S0RX_SDA | LCDVD[4]", "P0.2", "I2S0RX_SDA", ", unless LCD is enabled in which case LCDVD[4]"),
    (1, "P0.1 / I2S1RX_WS", "P0.1", "I2S1RX_WS", ""),
    (0, "P0.0 / I2S1RX_CLK", "P0.0", "I2S1RX_CLK", ""),
];

const P2_MUX: &[MuxBit] = &[
    (5, "GPIO_5 / SSEL0 / MCFB0", "GPIO_5", "SSEL0, unless TIMCLK_CTRL1[6] == 1 in which case MCFB0", ""),
    (4, "GPIO_4 / SSEL1 | LCDVD[22]", "GPIO_4", "SSEL1", ", unless LCD is enabled in which case LCDVD[22]"),
    (3, "EMC_D_SEL", "", "EMC_D[31:19] pins are connected to the GPIO block", ""),
    (2, "GPO_21 / U4_TX | LCDVD[3]", "GPO_21", "U4_TX", ", unless LCD is enabled in which case LCDVD[3]"),
    (1, "GPIO_3 / KEY_ROW7 | ENET_MDIO", "GPIO_3", "KEY_ROW7", ", unless ethernet MAC is enabled in which case ENET_MDIO"),
    (0, "GPIO_2 / KEY_ROW6 | ENET_MDC", "GPIO_2", "KEY_ROW6", ", unless ethernet MAC is enabled in which case ENET_MDC"),
];

const P3_MUX: &[MuxBit] = &[
    (18, "GPO_18 / MC0A / LCDLP", "GPO_18", "MC0A if TIMCLK_CTRL1[6] == 1", ", unless LCD is enabled in which case LCDLP"),
    (16, "GPO_16 / MC0B / LCDENAB / LCDM", "GPO_16", "MC0B if TIMCLK_CTRL1[6] == 1", ", unless LCD is enabled in which case LCDENAB / LCDM"),
    (15, "GPO_15 / MC1A / LCDFP", "GPO_15", "MC1A if TIMCLK_CTRL1[6] == 1", ", unless LCD is enabled in which case LCDFP"),
    (13, "GPO_13 / MC1B / LCDDCLK", "GPO_13", "MC1B if TIMCLK_CTRL1[6] == 1", ", unless LCD is enabled in which case LCDDCLK"),
    (12, "GPO_12 / MC2A / LCDLE", "GPO_12", "MC2A if TIMCLK_CTRL1[6] == 1", ", unless LCD is enabled in which case LCDLE"),
    (10, "GPO_10 / MC2B / LCDPWR", "GPO_10", "MC2B if TIMCLK_CTRL1[6] == 1", ", unless LCD is enabled in which case LCDPWR"),
    (2, "GPO_2 / MAT1.0 | LCDVD[0]", "GPO_2", "MAT1.0", ", unless LCD is enabled in which case LCDVD[0]"),
];

/// Render `table` from bit `top` down, filling gaps with reserved ranges
fn mux_state(val: u32, top: u32, table: &[MuxBit]) -> String {
    let mut r = FieldReport::new();
    let mut next = top;
    for &(bit, label, off, on, note) in table {
        if bit < next {
            r.field(val, next, bit + 1, "(reserved)", blank);
        }
        r.field(val, bit, bit, label, |f| {
            format!("{}{}", if f == 0 { off } else { on }, note)
        });
        next = bit.wrapping_sub(1);
    }
    if next != u32::MAX {
        r.field(val, next, 0, "(reserved)", blank);
    }
    r.finish()
}

fn periph_state(val: u32) -> String {
    mux_state(val, 31, PERIPH_MUX)
}

fn p0_state(val: u32) -> String {
    mux_state(val, 31, P0_MUX)
}

fn p1_state(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 31, 24, "(reserved)", blank);
    for bit in (0..24).rev() {
        r.field(val, bit, bit, &format!("EMC_A[{:02}] / P1.{}", bit, bit), |f| {
            if f == 1 {
                format!("P1.{}", bit)
            } else {
                format!("EMC_A[{:02}]", bit)
            }
        });
    }
    r.finish()
}

fn p2_state(val: u32) -> String {
    mux_state(val, 31, P2_MUX)
}

fn p3_state(val: u32) -> String {
    mux_state(val, 31, P3_MUX)
}

fn uart_ctrl(val: u32) -> String {
    let mut r = FieldReport::new();
    r.field(val, 11, 11, "UART3_MD_CTRL", |f| {
        format!("UART3 {} modem control pins", if f == 0 { "does not use" } else { "uses" })
    });
    r.field(val, 10, 10, "HDPX_INV", |f| {
        format!("IRRX6 is {}inverted", if f == 0 { "not " } else { "" })
    });
    r.field(val, 9, 9, "HDPX_EN", |f| {
        if f == 0 {
            "IRRX6 is not disabled by TXD".into()
        } else {
            "IRRX6 is masked while TXD is low".into()
        }
    });
    r.field(val, 8, 6, "(reserved)", blank);
    r.field(val, 5, 5, "UART6_IRDA", |f| {
        format!("UART6 {} the IrDA modem", if f == 0 { "uses" } else { "bypasses" })
    });
    r.field(val, 4, 4, "IRTX6_INV", |f| {
        format!("IRTX6 is {}inverted", if f == 0 { "not " } else { "" })
    });
    r.field(val, 3, 3, "IRRX6_INV", |f| {
        format!("IRRX6 is {}inverted", if f == 0 { "not " } else { "" })
    });
    r.finish()
}

/// Pin multiplexing register set
pub fn registers() -> RegisterSet {
    use Access as A;
    let r = RegisterDescriptor::new;

    RegisterSet::new(
        "pinmux",
        vec![
            r(0x4000_4090, 0, "MAC_CLK_CTRL", "Ethernet MAC clock control", A::RW),
            r(0x4000_4054, 0, "LCD_CFG", "LCD configuration", A::RW),
            r(0x4005_4000, 0, "UART_CTRL", "UART control", A::RW).with_decoder(uart_ctrl),
            r(0x4000_4080, 0, "MS_CTRL", "Memory card control", A::RW),
            r(0x4002_8100, 0, "P_MUX_SET", "Peripheral multiplexer set", A::WRITE),
            r(0x4002_8104, 0, "P_MUX_CLR", "Peripheral multiplexer clear", A::WRITE),
            r(0x4002_8108, 0, "P_MUX_STATE", "Peripheral multiplexer state", A::READ)
                .with_decoder(periph_state),
            r(0x4002_8120, 0, "P0_MUX_SET", "Port 0 mux set", A::WRITE),
            r(0x4002_8124, 0, "P0_MUX_CLR", "Port 0 mux clear", A::WRITE),
            r(0x4002_8128, 0, "P0_MUX_STATE", "Port 0 mux state", A::READ).with_decoder(p0_state),
            r(0x4002_8130, 0, "P1_MUX_SET", "Port 1 mux set", A::WRITE),
            r(0x4002_8134, 0, "P1_MUX_CLR", "Port 1 mux clear", A::WRITE),
            r(0x4002_8138, 0, "P1_MUX_STATE", "Port 1 mux state", A::READ).with_decoder(p1_state),
            r(0x4002_8028, 0, "P2_MUX_SET", "Port 2 mux set", A::WRITE),
            r(0x4002_802C, 0, "P2_MUX_CLR", "Port 2 mux clear", A::WRITE),
            r(0x4002_8030, 0, "P2_MUX_STATE", "Port 2 mux state", A::READ).with_decoder(p2_state),
            r(0x4002_8110, 0, "P3_MUX_SET", "Port 3 mux set", A::WRITE),
            r(0x4002_8114, 0, "P3_MUX_CLR", "Port 3 mux clear", A::WRITE),
            r(0x4002_8118, 0, "P3_MUX_STATE", "Port 3 mux state", A::READ).with_decoder(p3_state),
        ],
    )
}
