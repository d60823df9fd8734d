#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::{self, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{self, UartRx};
use led_visor::{
    Error, Result,
    button::{Button, PressedTo},
    face::BUILTIN_FACES,
    led_strip::PioPanel,
    led2d::{LED_COUNT, VISOR_LAYOUT},
    serial::UartKeycodes,
    visor::{StopSignal, VISOR_CONFIG_DEFAULT, Visor},
};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
    UART0_IRQ => uart::InterruptHandler<UART0>;
});

static STOP: StopSignal = StopSignal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    if let Err(err) = inner_main(spawner).await {
        panic!("{err}");
    }
    // Stopped by the button: the last face stays lit.
    info!("visor stopped");
    loop {
        core::future::pending::<()>().await;
    }
}

async fn inner_main(spawner: Spawner) -> Result<()> {
    let p = embassy_rp::init(Default::default());
    let config = &VISOR_CONFIG_DEFAULT;

    // 32x16 panel: data on GPIO 0, driven by PIO0 state machine 0.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let driver =
        PioWs2812::<'_, PIO0, 0, LED_COUNT, _>::new(&mut common, sm0, p.DMA_CH0, p.PIN_0, &program);
    let panel = PioPanel::new(driver, config.settle_delay);

    // Keypad: UART0 RX on GPIO 1, 9600 8N1.
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = config.baud_rate;
    let uart_rx = UartRx::new(p.UART0, p.PIN_1, Irqs, p.DMA_CH1, uart_config);
    let mut keycodes = UartKeycodes::new(uart_rx, config.read_timeout);

    // Stop button on GPIO 13, wired to ground.
    let button = Button::new(p.PIN_13, PressedTo::Ground);
    spawner
        .spawn(stop_button_task(button, &STOP))
        .map_err(Error::TaskSpawn)?;

    let mut visor = Visor::new(&VISOR_LAYOUT, config, BUILTIN_FACES, panel);
    visor.start().await?;
    visor.run(&mut keycodes, &STOP).await
}

#[embassy_executor::task]
async fn stop_button_task(button: Button<'static>, stop: &'static StopSignal) {
    button.signal_on_press(stop).await;
}
