//! Gain and offset error budget of a differential accelerometer front end.
//!
//! Demonstrates: configure the default strategy from the environment →
//! build component values with tolerances → chain the transfer function
//! → print every intermediate with its propagated error.
//!
//! Run with `ERRPROP_STRATEGY=worst-case` (or `extreme`) to compare
//! strategies, and `RUST_LOG=debug` to see strategy changes.

use errprop_budget::{rss_percent, ErrorBudget};
use errprop_context::{default_strategy, measured, toleranced, ContextConfig};
use errprop_core::{PropagationError, UncertainValue};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn show(label: &str, v: &UncertainValue) {
    println!("{label:<6}= {v}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = ContextConfig::from_env()?;
    config.apply();
    info!(strategy = %default_strategy(), "error budget");

    // Resistor network, 0.1% parts.
    let r1 = toleranced(93_500.0, 0.001)?;
    let r2 = toleranced(93_500.0, 0.001)?;
    let r4 = toleranced(93_500.0, 0.001)?;
    let r5 = toleranced(93_500.0, 0.001)?;
    let r6 = toleranced(130e3, 0.001)?;

    // Supply, output common mode (LTC1992 grade H), and the fixed
    // divide-by-two of the differential stage.
    let vcc = toleranced(3.6, 0.02)?;
    let vocm = measured(2.5, 0.07)?;
    let factor = measured(2.0, 0.0)?;

    // Accelerometer output at 50 g: supply sensitivity 2%, temperature 5%.
    let mut vacc_budget = ErrorBudget::new(3.24);
    vacc_budget
        .add_percent("supply", 2.0)?
        .add_percent("temperature", 5.0)?;
    let vacc = vacc_budget.to_uncertain(default_strategy())?;
    println!(
        "Vacc budget: {:.3}% RSS, dominated by {}",
        rss_percent([2.0, 5.0]),
        vacc_budget.dominant().map(|(name, _)| name).unwrap_or("-")
    );

    let vref = vcc.mul(&r1)?.div(&r1.add(&r2)?)?;
    let gain = r6.mul(&r4.add(&r5)?)?.div(&r4.mul(&r5)?)?;
    let va_vr = vacc.sub(&vref)?;
    let vodm = va_vr.mul(&gain)?.div(&factor)?;
    let vpn = vodm.add(&vocm)?;

    show("Vacc", &vacc);
    show("Vref", &vref);
    show("Gain", &gain);
    show("VaVr", &va_vr);
    show("Vodm", &vodm);
    show("Vpn", &vpn);

    match vpn.error().ppm() {
        Ok(ppm) => println!("Vpn relative error: {ppm:.0} ppm"),
        Err(PropagationError::UndefinedRelativeError) => println!("Vpn relative error: --"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
