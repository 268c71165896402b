#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use k155id1::{CathodeMap, DecoderPins, K155ID1};
use panic_halt as _;

const NUM_TUBES: usize = 4; // HH, HL, MH, ML
const DWELL_MS: u16 = 2;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let decoder_pins = DecoderPins {
        d: pins.d10.into_output().downgrade(),
        c: pins.d11.into_output().downgrade(),
        b: pins.d12.into_output().downgrade(),
        a: pins.d13.into_output().downgrade(),
    };
    let mut anodes = [
        pins.d9.into_output().downgrade(),
        pins.d8.into_output().downgrade(),
        pins.d7.into_output().downgrade(),
        pins.d6.into_output().downgrade(),
    ];
    let mut neon = pins.d5.into_output();

    let mut decoder = K155ID1::new(decoder_pins, CathodeMap::REV2);
    decoder.init().unwrap();

    ufmt::uwriteln!(&mut serial, "Cycling numerals...").unwrap_infallible();
    for digit in 0..=k155id1::MAX_DIGIT {
        for _ in 0..50 {
            for anode in anodes.iter_mut() {
                decoder.set_digit(digit).unwrap();
                anode.set_high();
                arduino_hal::delay_ms(DWELL_MS);
                anode.set_low();
                decoder.reset().unwrap();
            }
        }
    }

    ufmt::uwriteln!(&mut serial, "Counting up...").unwrap_infallible();
    let mut count: u16 = 0;
    loop {
        let mut digits = [0u8; NUM_TUBES];
        let mut n = count;
        for d in digits.iter_mut().rev() {
            *d = (n % 10) as u8;
            n /= 10;
        }

        neon.toggle();
        for _ in 0..75 {
            for (anode, &digit) in anodes.iter_mut().zip(digits.iter()) {
                // select lines settle before the anode is energised
                decoder.set_digit(digit).unwrap();
                anode.set_high();
                arduino_hal::delay_ms(DWELL_MS);
                anode.set_low();
                decoder.reset().unwrap();
            }
        }

        count = (count + 1) % 10_000;
    }
}
