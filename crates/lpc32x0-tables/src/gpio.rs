//! GPIO block (ports 0-3)

use lpc32x0_core::report::FieldReport;
use lpc32x0_core::{Access, RegisterDescriptor, RegisterSet};

/// P3_INP_STATE bit ranges and the pins they sample
const P3_INPUTS: &[(u32, u32, &str)] = &[
    (31, 29, "(reserved)"),
    (28, 28, "GPI_28 / U3_RI"),
    (27, 27, "GPI_27 / SPI2_DATIN / MISO1 | LCDVD[21]"),
    (26, 26, "(reserved)"),
    (25, 25, "GPI_25 / SPI1_DATIN / MISO0 / MCFB2"),
    (24, 24, "GPIO_5 / SSEL0 / MCFB0"),
    (23, 23, "GPI_23 / U7_RX / CAP0.0 | LCDVD[10]"),
    (22, 22, "GPI_22 / U7_HCTS / CAP0.1 | LCDCLKIN"),
    (21, 21, "GPI_21 / U6_IRRX"),
    (20, 20, "GPI_20 / U5_RX"),
    (19, 19, "GPI_19 / U4_RX"),
    (18, 18, "GPI_18 / U3_RX"),
    (17, 17, "GPI_17 / U2_RX | U3_DSR"),
    (16, 16, "GPI_16 / U2_HCTS | U3_CTS"),
    (15, 15, "GPI_15 / U1_RX | CAP1.0"),
    (14, 14, "GPIO_4 / SSEL1 | LCDVD[22]"),
    (13, 13, "GPIO_3 / KEY_ROW7 | ENET_MDIO"),
    (12, 12, "GPIO_2 / KEY_ROW6 | ENET_MDC"),
    (11, 11, "GPIO_1"),
    (10, 10, "GPIO_0"),
    (9, 9, "GPI_9 / KEY_COL7 | ENET_COL"),
    (8, 8, "GPI_8 / KEY_COL6 / SPI2_BUSY | ENET_RX_DV"),
    (7, 7, "GPI_7"),
    (6, 6, "GPI_6 / HSTIM_CAP | ENET_RXD2"),
    (5, 5, "GPI_5 / U3_DCD"),
    (4, 4, "GPI_4 / SPI1_BUSY"),
    (3, 3, "GPI_3"),
    (2, 2, "GPI_2 / CAP2.0 | ENET_RXD3"),
    (1, 1, "GPI_1 / SERVICE_N"),
    (0, 0, "GPI_0 / I2S1RX_SDA"),
];

/// P3_OUTP_STATE bit ranges and the pins they drive
const P3_OUTPUTS: &[(u32, u32, &str)] = &[
    (31, 31, "(reserved)"),
    (30, 30, "GPIO_5 / SSEL0 / MCFB0"),
    (29, 29, "GPIO_4 / SSEL1 | LCDVD[22]"),
    (28, 28, "GPIO_3 / KEY_ROW7 | ENET_MDIO"),
    (27, 27, "GPIO_2 / KEY_ROW6 | ENET_MDC"),
    (26, 26, "GPIO_1"),
    (25, 25, "GPIO_0"),
    (24, 24, "(reserved)"),
    (23, 23, "GPO_23 / U2_HRTS | U3_RTS"),
    (22, 22, "GPO_22 / U7_HRTS / LCDVD[22]"),
    (21, 21, "GPO_21 / U4_TX | LCDVD[3]"),
    (20, 20, "GPO_20"),
    (19, 19, "GPO_19"),
    (18, 18, "GPO_18 / MC0A | LCDLP"),
    (17, 17, "GPO_17"),
    (16, 16, "GPO_16 / MC0B | LCDLP"),
    (15, 15, "GPO_15 / MC1A | LCDFP"),
    (14, 14, "GPO_14"),
    (13, 13, "GPO_13 / MC1B | LCDDCLK"),
    (12, 12, "GPO_12 / KC2A | LCDLE"),
    (11, 11, "GPO_11"),
    (10, 10, "GPO_10 / MC2B | LCDPWR"),
    (9, 9, "GPO_9 | LCDVD[9]"),
    (8, 8, "GPO_8 | LCDVD[8]"),
    (7, 7, "GPO_7 | LCDVD[2]"),
    (6, 6, "GPO_6 | LCDVD[18]"),
    (5, 5, "GPO_5"),
    (4, 4, "GPO_4"),
    (3, 3, "GPO_3 | LCDVD[1]"),
    (2, 2, "GPO_2 / T1_MAT.0 | LCDVD[0]"),
    (1, 1, "GPO_1"),
    (0, 0, "GPO_0 | TST_CLK1"),
];

fn pin_table(val: u32, table: &[(u32, u32, &str)]) -> String {
    let mut r = FieldReport::new();
    for &(high, low, pin) in table {
        r.bits(val, high, low, |_| pin.to_string());
    }
    r.finish()
}

fn p3_input_state(val: u32) -> String {
    pin_table(val, P3_INPUTS)
}

fn p3_output_state(val: u32) -> String {
    pin_table(val, P3_OUTPUTS)
}

/// GPIO register set
pub fn registers() -> RegisterSet {
    use Access as A;
    let r = RegisterDescriptor::new;

    RegisterSet::new(
        "gpio",
        vec![
            r(0x4002_8040, 0, "P0_INP_STATE", "Port 0 input pin state", A::READ),
            r(0x4002_8044, 0, "P0_OUTP_SET", "Port 0 output pin set", A::WRITE),
            r(0x4002_8048, 0, "P0_OUTP_CLR", "Port 0 output pin clear", A::WRITE),
            r(0x4002_804C, 0, "P0_OUTP_STATE", "Port 0 output pin state", A::READ),
            r(0x4002_8050, 0, "P0_DIR_SET", "Port 0 direction set", A::WRITE),
            r(0x4002_8054, 0, "P0_DIR_CLR", "Port 0 direction clear", A::WRITE),
            r(0x4002_8058, 0, "P0_DIR_STATE", "Port 0 direction state", A::READ),
            r(0x4002_8060, 0, "P1_INP_STATE", "Port 1 input pin state", A::READ),
            r(0x4002_8064, 0, "P1_OUTP_SET", "Port 1 output pin set", A::WRITE),
            r(0x4002_8068, 0, "P1_OUTP_CLR", "Port 1 output pin clear", A::WRITE),
            r(0x4002_806C, 0, "P1_OUTP_STATE", "Port 1 output pin state", A::READ),
            r(0x4002_8070, 0, "P1_DIR_SET", "Port 1 direction set", A::WRITE),
            r(0x4002_8074, 0, "P1_DIR_CLR", "Port 1 direction clear", A::WRITE),
            r(0x4002_8078, 0, "P1_DIR_STATE", "Port 1 direction state", A::READ),
            r(0x4002_801C, 0, "P2_INP_STATE", "Port 2 input pin state", A::READ),
            r(0x4002_8020, 0, "P2_OUTP_SET", "Port 2 output pin set", A::WRITE),
            r(0x4002_8024, 0, "P2_OUTP_CLR", "Port 2 output pin clear", A::WRITE),
            r(0x4002_8010, 0, "P2_DIR_SET", "Port 2/3 direction set", A::WRITE),
            r(0x4002_8014, 0, "P2_DIR_CLR", "Port 2/3 direction clear", A::WRITE),
            r(0x4002_8018, 0, "P2_DIR_STATE", "Port 2/3 direction state", A::READ),
            r(0x4002_8000, 0, "P3_INP_STATE", "Port 3 input pin state", A::READ)
                .with_decoder(p3_input_state),
            r(0x4002_8004, 0, "P3_OUTP_SET", "Port 3 output pin set", A::WRITE),
            r(0x4002_8008, 0, "P3_OUTP_CLR", "Port 3 output pin clear", A::WRITE),
            r(0x4002_800C, 0, "P3_OUTP_STATE", "Port 3 output pin state", A::READ)
                .with_decoder(p3_output_state),
        ],
    )
}
