use crate::Instant;

fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    unsafe {
        libc::clock_gettime(clock, &mut ts);
    }

    ts
}

fn to_nanos(ts: libc::timespec) -> u64 {
    (ts.tv_sec as u64)
        .wrapping_mul(1_000_000_000)
        .wrapping_add(ts.tv_nsec as u64)
}

pub fn monotonic() -> Instant {
    Instant {
        ns: to_nanos(read_clock(libc::CLOCK_MONOTONIC)),
    }
}

pub fn realtime() -> Instant {
    Instant {
        ns: to_nanos(read_clock(libc::CLOCK_REALTIME)),
    }
}
