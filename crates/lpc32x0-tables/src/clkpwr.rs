//! Clock and power control block

use lpc32x0_core::report::FieldReport;
use lpc32x0_core::{Access, RegisterDescriptor, RegisterSet};

fn clock_enable(field: u32) -> String {
    if field == 0 {
        "disable".into()
    } else {
        "enable".into()
    }
}

fn pin_level(driven_by_block: bool, block: &str, ctrl_bit: u32) -> impl FnOnce(u32) -> String + '_ {
    move |field| {
        if driven_by_block {
            format!("this pin is driven by the {} block", block)
        } else if field == 0 {
            format!("the pin drives low (bit {} == 0)", ctrl_bit)
        } else {
            format!("the pin drives high (bit {} == 0)", ctrl_bit)
        }
    }
}

fn spi_ctrl(val: u32) -> String {
    let spi1_pins = val & 0x02 != 0;
    let spi2_pins = val & 0x20 != 0;
    let mut r = FieldReport::new();

    r.field(val, 7, 7, "SPI2_DATIO output level", pin_level(spi2_pins, "SPI2", 5));
    r.field(val, 6, 6, "SPI2_CLK output level", pin_level(spi2_pins, "SPI2", 5));
    r.field(val, 5, 5, "output pin control", |f| {
        if f == 0 {
            "SPI2_DATIO and SPI2_CLK outputs the level set by bit 6 and 7".into()
        } else {
            "SPI2_DATIO and SPI2_CLK are driven by the SPI2 block".into()
        }
    });
    r.field(val, 4, 4, "SPI2 clock enable control", clock_enable);
    r.field(val, 3, 3, "SPI1_DATIO output level", pin_level(spi1_pins, "SPI1", 1));
    r.field(val, 2, 2, "SPI1_CLK output level", pin_level(spi1_pins, "SPI1", 1));
    r.field(val, 1, 1, "output pin control", |f| {
        if f == 0 {
            "SPI1_DATIO and SPI1_CLK outputs the level set by bit 2 and 3".into()
        } else {
            "SPI1_DATIO and SPI1_CLK are driven by the SPI1 block".into()
        }
    });
    r.field(val, 0, 0, "SPI1 clock control", clock_enable);
    r.finish()
}

/// Clock and power register set
pub fn registers() -> RegisterSet {
    use Access as A;
    let r = RegisterDescriptor::new;

    RegisterSet::new(
        "clkpwr",
        vec![
            r(0x4000_4044, 0x0000_0012, "PWR_CTRL", "AHB/ARM power control register", A::RW),
            r(0x4000_404C, 0x0000_0100, "OSC_CTRL", "Main oscillator control register", A::RW),
            r(0x4000_4050, 0x0000_0B48, "SYSCLK_CTRL", "SYSCLK control register", A::RW),
            r(0x4000_4048, 0, "PLL397_CTRL", "PLL397 PLL control register", A::RW),
            r(0x4000_4058, 0, "HCLKPLL_CTRL", "ARM and HCLK PLL control register", A::RW),
            r(0x4000_4040, 0, "HCLKDIV_CTRL", "HCLK divider settings", A::RW),
            r(0x4000_40A4, 0, "TEST_CLK", "Clock testing control", A::RW),
            r(0x4000_40EC, 0, "AUTOCLK_CTRL", "Auto clock control register", A::RW),
            r(0x4000_4030, 0, "START_ER_PIN", "Start Enable register - pin sources", A::RW),
            r(0x4000_4020, 0, "START_ER_INT", "Start Enable register - internal sources", A::RW),
            r(0x4000_4018, 0, "P0_INTR_ER", "Start and Interrupt Enable register; p0 & p1 sources", A::RW),
            r(0x4000_4038, 0, "START_SR_PIN", "Start status register - pin sources", A::READ),
            r(0x4000_4028, 0, "START_SR_INT", "Start status register - internal sources", A::READ),
            r(0x4000_4034, 0, "START_RSR_PIN", "Start Raw status register - pin sources", A::RW),
            r(0x4000_4024, 0, "START_RSR_INT", "Start Raw status register - internal sources", A::RW),
            r(0x4000_403C, 0, "START_APR_PIN", "Start activation polarity register - pin sources", A::RW),
            r(0x4000_402C, 0, "START_APR_INT", "Start activation polarity register - internal sources", A::RW),
            r(0x4000_4064, 0x0008_0000, "USB_CTRL", "USB PLL and pad control register", A::RW),
            r(0x4000_401C, 0x0000_000C, "USBDIV_CTRL", "USB PLL pre-divider settings", A::RW),
            r(0x4000_4080, 0, "MS_CTRL", "SD Card interface clock and pad control", A::RW),
            r(0x4000_40E8, 0x0000_0001, "DMACLK_CTRL", "DMA clock control register", A::RW),
            r(0x4000_40C8, 0x0000_0003, "FLASHCLK_CNTRL", "Flash clock control", A::RW),
            r(0x4000_4090, 0, "MACCLK_CTRL", "Ethernet MAC clock control", A::RW),
            r(0x4000_4054, 0, "LCDCLK_CTRL", "LCD clock control", A::RW),
            r(0x4000_407C, 0, "I2S_CTRL", "I2S control register", A::RW),
            r(0x4000_4078, 0, "SSP_CTRL", "SSP0 and SSP1 clock control", A::RW),
            r(0x4000_40C4, 0, "SPI_CTRL", "SPI1 and SPI2 clock and pin control", A::RW)
                .with_decoder(spi_ctrl),
            r(0x4000_40AC, 0, "I2CCLK_CTRL", "I2C clock control register", A::RW),
            r(0x4000_40C0, 0, "TIMCLK_CTRL1", "Timer[5:0] and MCPWM clock control", A::RW),
            r(0x4000_40BC, 0, "TIMCLK_CTRL", "Timer clock control", A::RW),
            r(0x4000_40B4, 0, "ADCLK_CTRL", "ADC clock control", A::RW),
            r(0x4000_4060, 0, "ADCLK_CTRL1", "Second ADC clock control register", A::RW),
            r(0x4000_40B0, 0, "KEYCLK_CTRL", "Keypad clock control", A::RW),
            r(0x4000_40B8, 0, "PWMCLK_CTRL", "PWM clock control", A::RW),
            r(0x4000_40E4, 0x0000_000F, "UARTCLK_CTRL", "General UART clock control register", A::RW),
            r(0x4000_4110, 0, "POS0_IRAM_CTRL", "Internal memory power off control register 0", A::RW),
            r(0x4000_4114, 0, "POS1_IRAM_CTRL", "Internal memory power off control register 1", A::RW),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spi_ctrl_spi1_enabled() {
        let text = spi_ctrl(0x03);
        assert!(text.contains("SPI1_DATIO and SPI1_CLK are driven by the SPI1 block"));
        assert!(text.contains("this pin is driven by the SPI1 block"));
        assert!(text.contains("SPI2_DATIO and SPI2_CLK outputs the level set by bit 6 and 7"));
        assert!(text.contains("the pin drives low (bit 5 == 0)"));
    }

    #[test]
    fn test_set_size() {
        assert_eq!(registers().len(), 37);
    }
}
