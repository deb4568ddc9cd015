use std::env;

fn main() {
    // Tuning bounds of the RF front end (optional)
    // These override the built-in limits used for the tuned frequency

    // Lowest tunable frequency in Hz
    if let Ok(min) = env::var("RADIO_TUNING_MIN_HZ") {
        println!("cargo:rustc-env=RADIO_TUNING_MIN_HZ={}", min);
        println!("cargo:warning=Using RADIO_TUNING_MIN_HZ from environment: {}", min);
    } else {
        println!("cargo:rustc-env=RADIO_TUNING_MIN_HZ=");
    }

    // Highest tunable frequency in Hz
    if let Ok(max) = env::var("RADIO_TUNING_MAX_HZ") {
        println!("cargo:rustc-env=RADIO_TUNING_MAX_HZ={}", max);
        println!("cargo:warning=Using RADIO_TUNING_MAX_HZ from environment: {}", max);
    } else {
        println!("cargo:rustc-env=RADIO_TUNING_MAX_HZ=");
    }

    // Tuned frequency after a reset, in Hz
    if let Ok(reset) = env::var("RADIO_TUNING_RESET_HZ") {
        println!("cargo:rustc-env=RADIO_TUNING_RESET_HZ={}", reset);
        println!(
            "cargo:warning=Using RADIO_TUNING_RESET_HZ from environment: {}",
            reset
        );
    } else {
        println!("cargo:rustc-env=RADIO_TUNING_RESET_HZ=");
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=RADIO_TUNING_MIN_HZ");
    println!("cargo:rerun-if-env-changed=RADIO_TUNING_MAX_HZ");
    println!("cargo:rerun-if-env-changed=RADIO_TUNING_RESET_HZ");
}
