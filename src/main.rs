//! A field-settable clock and alarm on a 20x4 character LCD, driven by a
//! 4x4 matrix keypad.
//!
//! Runs on a Raspberry Pi Pico. The backing clock is a DS3231 on the same
//! I2C bus as the display; a serial console on UART0 accepts the two
//! line-oriented set commands. See the `README.md` for more information.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Output;
use embassy_time::Timer;
use embedded_hal::i2c::I2c;
use embedded_hal_bus::i2c::AtomicDevice;
use embedded_hal_bus::util::AtomicCell;
use keypad_clock::{
    alarm_due, seed_from_unix, Buzzer, Command, Console, ConsoleNotifier, Ds3231, EditKind,
    EditSession, EditStep, Field, Hardware, Key, Keypad, KeypadNotifier, Never, Result, Screen,
    TimeStore, HEARTBEAT_OFF, HEARTBEAT_ON, ONE_SECOND,
};
use panic_probe as _;

/// Wall-clock seconds at the moment this firmware was built, set by `build.rs`.
/// Used to reseed the clock chip after it reports a power loss.
const BUILD_UNIX_TIME: &str = env!("BUILD_UNIX_TIME");

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

#[expect(clippy::items_after_statements, reason = "Keeps related code together")]
async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();
    let i2c_bus = AtomicCell::new(hardware.i2c);

    let mut screen = Screen::new(AtomicDevice::new(&i2c_bus)).await;
    let mut rtc = Ds3231::new(AtomicDevice::new(&i2c_bus));

    // The clock chip is the one part the appliance cannot limp along
    // without. Say so on the face and blink until someone reseats it.
    if !rtc.begin() {
        error!("clock chip did not answer the presence probe");
        screen.status("CLOCK NOT FOUND").await;
        halt_with_heartbeat(hardware.led).await;
    }

    if rtc.lost_power()? {
        let seed = seed_from_unix(BUILD_UNIX_TIME.parse().unwrap_or(0));
        warn!("clock chip lost power; reseeding to the build moment {}", seed);
        rtc.adjust(&seed)?;
    }

    static KEYPAD_NOTIFIER: KeypadNotifier = Keypad::notifier();
    let keypad = Keypad::new(
        hardware.keypad_rows,
        hardware.keypad_columns,
        &KEYPAD_NOTIFIER,
        spawner,
    )?;

    static CONSOLE_NOTIFIER: ConsoleNotifier = Console::notifier();
    let console = Console::new(
        hardware.uart,
        hardware.uart_tx,
        hardware.uart_rx,
        &CONSOLE_NOTIFIER,
        spawner,
    )?;

    let mut buzzer = Buzzer::new(hardware.buzzer);
    let mut store = TimeStore::new();

    let snapshot = rtc.snapshot()?;
    store.load_from(&snapshot);
    screen.refresh(&snapshot, &store).await;
    info!("clock running: {}", store.date_time());

    loop {
        match select3(
            keypad.next_key(),
            console.next_command(),
            Timer::after(ONE_SECOND),
        )
        .await
        {
            Either3::First(key) => match key {
                Key::TimeSet => {
                    run_edit_session(EditKind::DateTime, &mut store, &mut rtc, &mut screen, &keypad)
                        .await?;
                }
                Key::AlarmEdit => {
                    run_edit_session(EditKind::Alarm, &mut store, &mut rtc, &mut screen, &keypad)
                        .await?;
                }
                // Navigation keys mean nothing outside a session.
                Key::Up | Key::Down | Key::Left | Key::Right => {}
            },
            Either3::Second(command) => {
                apply_command(command, &mut store, &mut rtc, &mut screen).await?;
            }
            Either3::Third(()) => {
                let snapshot = rtc.snapshot()?;
                screen.refresh(&snapshot, &store).await;
                let (alarm_hour, alarm_minute) = store.alarm_time();
                if alarm_due(&snapshot, alarm_hour, alarm_minute) {
                    // No latch: this fires again on every pass through the
                    // matching minute.
                    info!("alarm due at {}:{}", alarm_hour, alarm_minute);
                    buzzer.burst().await;
                }
            }
        }
    }
}

/// Run one edit session to completion. The session owns the keypad until
/// the commit key lands, so ticks, commands, and the alarm all wait.
async fn run_edit_session<I2cBus: I2c>(
    kind: EditKind,
    store: &mut TimeStore,
    rtc: &mut Ds3231<I2cBus>,
    screen: &mut Screen<I2cBus>,
    keypad: &Keypad<'_>,
) -> Result<()> {
    let mut session = match kind {
        EditKind::DateTime => {
            // Start from what the face shows right now.
            let snapshot = rtc.snapshot()?;
            store.load_from(&snapshot);
            EditSession::date_time()
        }
        EditKind::Alarm => EditSession::alarm(),
    };
    info!("edit session started: {}", kind);
    screen.place_cursor(session.field()).await;
    screen.edit_cursor_on().await;

    loop {
        let key = keypad.next_key().await;
        match session.apply(key, store) {
            EditStep::Ignored => {}
            EditStep::Moved(field) => screen.place_cursor(field).await,
            EditStep::Adjusted(field) => {
                screen.redraw_field(field, store).await;
                // Clock-backed fields go live on every keystroke, so the
                // chip never lags the face even if power dies mid-edit.
                if field.is_clock_backed() {
                    rtc.adjust(&store.date_time())?;
                }
            }
            EditStep::Committed(EditKind::DateTime) => {
                rtc.adjust(&store.date_time())?;
                screen.edit_cursor_off().await;
                let snapshot = rtc.snapshot()?;
                screen.refresh(&snapshot, store).await;
                info!("date-time committed: {}", store.date_time());
                return Ok(());
            }
            EditStep::Committed(EditKind::Alarm) => {
                // The alarm never touches the clock chip.
                screen.edit_cursor_off().await;
                screen.refresh_alarm(store).await;
                let (alarm_hour, alarm_minute) = store.alarm_time();
                info!("alarm committed: {}:{}", alarm_hour, alarm_minute);
                return Ok(());
            }
        }
    }
}

async fn apply_command<I2cBus: I2c>(
    command: Command,
    store: &mut TimeStore,
    rtc: &mut Ds3231<I2cBus>,
    screen: &mut Screen<I2cBus>,
) -> Result<()> {
    match command {
        Command::SetDateTime(fields) => {
            rtc.adjust(&fields)?;
            let snapshot = rtc.snapshot()?;
            store.load_from(&snapshot);
            screen.refresh(&snapshot, store).await;
            info!("console set date-time: {}", fields);
        }
        Command::SetAlarm { hour, minute } => {
            store.set(Field::AlarmHour, u16::from(hour));
            store.set(Field::AlarmMinute, u16::from(minute));
            screen.refresh_alarm(store).await;
            info!("console set alarm: {}:{}", hour, minute);
        }
    }
    Ok(())
}

/// Fatal-fault parking orbit: blink the onboard LED forever.
async fn halt_with_heartbeat(mut led: Output<'static>) -> ! {
    loop {
        led.set_high();
        Timer::after(HEARTBEAT_ON).await;
        led.set_low();
        Timer::after(HEARTBEAT_OFF).await;
    }
}
