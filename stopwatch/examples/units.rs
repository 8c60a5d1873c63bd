use std::thread::sleep;
use std::time::Duration;

use stopwatch::{
    DecimalMinutes, DecimalSeconds, IntegerCentiseconds, IntegerMilliseconds, IntegerNanoseconds,
    Stopwatch,
};

fn main() {
    let mut stopwatch: Stopwatch = Stopwatch::new();

    stopwatch.start();
    sleep(Duration::from_millis(1234));
    stopwatch.stop();

    println!("nanoseconds:  {}", stopwatch.elapsed::<IntegerNanoseconds>());
    println!("milliseconds: {}", stopwatch.elapsed::<IntegerMilliseconds>());
    println!("centiseconds: {}", stopwatch.elapsed::<IntegerCentiseconds>());
    println!("seconds:      {}", stopwatch.elapsed::<DecimalSeconds>());
    println!("minutes:      {}", stopwatch.elapsed::<DecimalMinutes>());
}
