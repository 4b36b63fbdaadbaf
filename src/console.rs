//! Serial console: assembles lines off the UART and parses them into
//! [`Command`]s.
//!
//! The console task owns the UART. It tolerates both CR and LF line endings
//! (and the CRLF pair, since the blank second line is skipped), caps lines
//! at a length no valid command reaches, and reports every rejected line
//! over the log with the parser's diagnostic. Parsed commands queue in the
//! notifier until the idle loop drains them; mid-edit they simply wait.

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig, RxPin, TxPin};
use embassy_rp::{bind_interrupts, Peri};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel as EmbassyChannel;
use embedded_io_async::Read;
use heapless::Vec;
use static_cell::StaticCell;

use crate::serial_cmd::{parse_line, Command};
use crate::shared_constants::CONSOLE_BAUD;
use crate::Result;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Longest line kept; far above the 12 digits a valid command needs.
const LINE_CAPACITY: usize = 32;

/// Notifier type for the `Console` device abstraction.
pub type ConsoleNotifier = EmbassyChannel<CriticalSectionRawMutex, Command, 4>;

/// A device abstraction for the line-oriented serial console.
///
/// Note: Hardcoded to the UART0 peripheral. TX and RX can be any pins
/// compatible with UART0.
pub struct Console<'a> {
    notifier: &'a ConsoleNotifier,
}

impl Console<'_> {
    /// Create Console resources.
    #[must_use]
    pub const fn notifier() -> ConsoleNotifier {
        EmbassyChannel::new()
    }

    /// Create a new Console device and start its reader task.
    ///
    /// # Errors
    ///
    /// [`crate::Error::TaskSpawn`] when the reader task cannot be spawned.
    pub fn new<Tx, Rx>(
        uart: Peri<'static, UART0>,
        tx: Peri<'static, Tx>,
        rx: Peri<'static, Rx>,
        notifier: &'static ConsoleNotifier,
        spawner: Spawner,
    ) -> Result<Self>
    where
        Tx: TxPin<UART0>,
        Rx: RxPin<UART0>,
    {
        static TX_BUFFER: StaticCell<[u8; 16]> = StaticCell::new();
        static RX_BUFFER: StaticCell<[u8; 64]> = StaticCell::new();

        let mut config = UartConfig::default();
        config.baudrate = CONSOLE_BAUD;
        let uart = BufferedUart::new(
            uart,
            tx,
            rx,
            Irqs,
            TX_BUFFER.init([0; 16]),
            RX_BUFFER.init([0; 64]),
            config,
        );
        spawner.spawn(console_task(uart, notifier))?;
        Ok(Self { notifier })
    }

    /// Next parsed command. Waits until one arrives.
    pub async fn next_command(&self) -> Command {
        self.notifier.receive().await
    }
}

#[embassy_executor::task]
async fn console_task(mut uart: BufferedUart<'static>, notifier: &'static ConsoleNotifier) -> ! {
    info!("console task started at {} baud", CONSOLE_BAUD);
    let mut line: Vec<u8, LINE_CAPACITY> = Vec::new();
    let mut overflowed = false;
    loop {
        let mut byte = [0; 1];
        match uart.read(&mut byte).await {
            Ok(0) => {}
            Ok(_) => {
                let [byte] = byte;
                handle_byte(byte, &mut line, &mut overflowed, notifier).await;
            }
            Err(err) => warn!("console: read failed: {:?}", err),
        }
    }
}

async fn handle_byte(
    byte: u8,
    line: &mut Vec<u8, LINE_CAPACITY>,
    overflowed: &mut bool,
    notifier: &'static ConsoleNotifier,
) {
    if byte == b'\r' || byte == b'\n' {
        if *overflowed {
            warn!("console: line too long, ignored");
        } else if !line.is_empty() {
            match parse_line(line) {
                Ok(command) => {
                    info!("console: {}", command);
                    notifier.send(command).await;
                }
                Err(err) => warn!("console: rejected line: {}", err),
            }
        }
        line.clear();
        *overflowed = false;
    } else if line.push(byte).is_err() {
        *overflowed = true;
    }
}
