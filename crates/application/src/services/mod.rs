mod serial_clock;

pub use serial_clock::SerialClock;
