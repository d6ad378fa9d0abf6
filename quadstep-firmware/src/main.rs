//! Quadstep - 4-wire stepper demonstration firmware
//!
//! Drives a 28BYJ-48 (or any 4-wire stepper on a ULN2003-style board) from
//! four RP2040 GPIOs and runs the demonstration script, reporting how long
//! each move took.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use quadstep_core::traits::StepperDriver;
use quadstep_drivers::demo::{DemoMove, DEMO_SCRIPT};
use quadstep_drivers::stepper::FourWireStepper;
use quadstep_hal_rp2040::{PinBank, Rp2040Gpio};

mod config;

/// Pause between demo runs
const DEMO_INTERVAL: Duration = Duration::from_secs(5);

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Quadstep firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    let gpio = Rp2040Gpio::new(PinBank::from_peripherals(p));

    let mut motor = match FourWireStepper::from_config(gpio, &config) {
        Ok(motor) => motor,
        Err(e) => {
            error!("Stepper setup failed: {:?}", e);
            loop {
                Timer::after(DEMO_INTERVAL).await;
            }
        }
    };
    info!("Stepper ready on pins {}", motor.pins());

    loop {
        for demo_move in DEMO_SCRIPT.iter() {
            if let Err(e) = run_move(&mut motor, demo_move) {
                error!("Move failed: {:?}", e);
                break;
            }
        }
        info!("Demo complete, restarting in {} s", DEMO_INTERVAL.as_secs());
        Timer::after(DEMO_INTERVAL).await;
    }
}

/// Run one demo move and log its duration
fn run_move<D>(motor: &mut D, demo_move: &DemoMove) -> Result<(), D::Error>
where
    D: StepperDriver,
    D::Error: Format,
{
    info!(
        "{} ({} steps, {} ms/step)...",
        demo_move.label,
        demo_move.steps(),
        demo_move.step_duration_ms
    );

    let begin = Instant::now();
    demo_move.apply(motor)?;
    info!("(took {} ms)", begin.elapsed().as_millis());
    Ok(())
}
