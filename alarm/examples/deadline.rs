use std::thread::sleep;
use std::time::Duration;

use alarm::Alarm;
use stopwatch::{DecimalMilliseconds, Stopwatch};

fn announce(label: &str, polls: u32) {
    println!("{label} fired after {polls} polls");
}

fn main() {
    let mut alarm: Alarm<(u32,)> = Alarm::new();
    alarm.set_interval(Duration::from_millis(250));
    alarm.set_function(announce, ("deadline",));

    let interval_ms = alarm.interval().as_secs_f64() * 1_000.0;

    let mut stopwatch: Stopwatch = Stopwatch::new();
    stopwatch.start();

    let mut polls = 0;
    while stopwatch.elapsed::<DecimalMilliseconds>() < interval_ms {
        polls += 1;
        sleep(Duration::from_millis(10));
    }

    alarm.execute((polls,)).unwrap();
}
