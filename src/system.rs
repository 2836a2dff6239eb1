//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg(target_os = "redox")]
extern crate syscall as redox_syscall;


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "redox")))]
use libc::clock_gettime;

#[cfg(all(unix, not(target_os = "redox")))]
use std::convert::TryFrom;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, null_mut());
    (tv.tv_sec as i64, tv.tv_usec as i32 * 1000)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;
    let mut ft = mem::zeroed();

    GetSystemTimeAsFileTime(&mut ft);
    (file_time_to_unix_seconds(&ft), file_time_to_nsec(&ft))
}

#[cfg(windows)]
fn file_time_to_nsec(ft: &FILETIME) -> i32 {
    let t = file_time_as_u64(ft) as i64;
    ((t % HECTONANOSECS_IN_SEC) * 100) as i32
}

#[cfg(windows)]
fn file_time_to_unix_seconds(ft: &FILETIME) -> i64 {
    let t = file_time_as_u64(ft) as i64;
    (t - HECTONANOSEC_TO_UNIX_EPOCH) / HECTONANOSECS_IN_SEC
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "redox", windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = clock_gettime(libc::CLOCK_REALTIME, &mut tv);
    (i64::from(tv.tv_sec), tv.tv_nsec as i32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(target_os = "redox")]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
   let mut ts = redox_syscall::TimeSpec::default();
   let realtime_clock = redox_syscall::CLOCK_REALTIME;
   let _ = redox_syscall::clock_gettime(realtime_clock, &mut ts);
   (ts.tv_sec, ts.tv_nsec)
}


/// Returns the offset from UTC, in seconds, that the operating system’s
/// local time zone has at the given Unix timestamp, if the OS will say.
#[cfg(all(unix, not(target_os = "redox")))]
pub(crate) fn sys_local_offset(unix_seconds: i64) -> Option<i32> {
    let time = libc::time_t::try_from(unix_seconds).ok()?;
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::localtime_r(&time, &mut tm) };
    if result.is_null() {
        None
    }
    else {
        Some(tm.tm_gmtoff as i32)
    }
}

/// Returns the offset from UTC, in seconds, that the operating system’s
/// local time zone has at the given Unix timestamp, if the OS will say.
#[cfg(not(all(unix, not(target_os = "redox"))))]
pub(crate) fn sys_local_offset(_unix_seconds: i64) -> Option<i32> {
    None
}
