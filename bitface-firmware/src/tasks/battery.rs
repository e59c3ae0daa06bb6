//! Battery sampling task
//!
//! Samples VSYS through the Pico's on-board 1/3 divider and watches the
//! VBUS sense pin for the charger. A charge state change is signalled to
//! the face; every sample is published for the face's synchronous peek.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use bitface_core::state::ChargeState;

use crate::channels::{BATTERY_STATE, CHARGE_SIGNAL};

/// Battery sampling configuration
#[derive(Clone)]
pub struct BatteryConfig {
    /// Interval between samples when nothing happens (s)
    pub sample_interval_s: u64,
    /// Settling time after a VBUS edge (ms)
    pub debounce_ms: u64,
    /// ADC reference voltage (mV)
    pub vref_mv: u32,
    /// VSYS divider ratio
    pub divider: u32,
    /// ADC resolution (12-bit = 4096)
    pub adc_max: u32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            sample_interval_s: 5,
            debounce_ms: 50,
            vref_mv: 3300,
            divider: 3,
            adc_max: 4096,
        }
    }
}

/// Convert a raw VSYS reading to millivolts at the battery
fn adc_to_millivolts(raw: u16, config: &BatteryConfig) -> u16 {
    let mv = u32::from(raw) * config.vref_mv * config.divider / config.adc_max;
    mv.min(u32::from(u16::MAX)) as u16
}

#[embassy_executor::task]
pub async fn battery_task(
    mut adc: Adc<'static, Async>,
    mut vsys: Channel<'static>,
    mut vbus: Input<'static>,
    config: BatteryConfig,
) {
    info!("Battery task started");

    let mut last: Option<ChargeState> = None;

    loop {
        match adc.read(&mut vsys).await {
            Ok(raw) => {
                let millivolts = adc_to_millivolts(raw, &config);
                let state = ChargeState::from_millivolts(vbus.is_high(), millivolts);
                trace!("VSYS {} mV -> {}%", millivolts, state.percent());

                BATTERY_STATE.lock(|cell| cell.set(Some(state)));

                if last != Some(state) {
                    debug!(
                        "Charge state: {}% charging={}",
                        state.percent(),
                        state.is_charging
                    );
                    CHARGE_SIGNAL.signal(state);
                    last = Some(state);
                }
            }
            Err(e) => {
                warn!("VSYS read failed: {:?}", Debug2Format(&e));
            }
        }

        match select(
            Timer::after_secs(config.sample_interval_s),
            vbus.wait_for_any_edge(),
        )
        .await
        {
            Either::First(()) => {}
            Either::Second(()) => {
                // Let VBUS settle before sampling
                Timer::after_millis(config.debounce_ms).await;
            }
        }
    }
}
