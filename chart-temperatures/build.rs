//! Embeds the sample temperature CSV for the "Load sample" button.
//!
//! A missing fixture becomes an empty file and the button stays disabled.

use std::env;
use std::fs;
use std::path::Path;

const SAMPLE: &str = "../fixtures/temperatures.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("temperatures.csv");

    match fs::read_to_string(SAMPLE) {
        Ok(csv) => fs::write(&dest, csv).unwrap(),
        Err(e) => {
            println!("cargo:warning=Sample {} unavailable ({}), embedding nothing", SAMPLE, e);
            fs::write(&dest, "").unwrap();
        }
    }

    println!("cargo:rerun-if-changed={}", SAMPLE);
    println!("cargo:rerun-if-changed=build.rs");
}
