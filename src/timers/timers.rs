use std::collections::HashMap;
use std::time::{Duration, Instant};

// nested wall clock timers.  Each timer can own a collection
// of subtimers, and the active timer path is held as a stack
// of keys in the top level `Timers` object.

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: HashMap<&'static str, InnerTimer>,
}

impl InnerTimer {
    fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
        self.subtimers.clear();
    }

    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    // bank the time so far if running, then
    // suspend the same way all the way down
    fn suspend(&mut self) {
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
            self.subtimers.values_mut().for_each(InnerTimer::suspend);
        }
    }

    // running timers just get a fresh start instant
    fn resume(&mut self) {
        if self.start.is_some() {
            self.start = Some(Instant::now());
            self.subtimers.values_mut().for_each(InnerTimer::resume);
        }
    }
}

/// Hierarchical collection of named timers
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: HashMap<&'static str, InnerTimer>,
}

impl Timers {
    // the subtimer collection of the currently active timer,
    // or the root collection if nothing is running
    fn active_subtimers(&mut self) -> &mut HashMap<&'static str, InnerTimer> {
        let mut map = &mut self.subtimers;
        for key in self.stack.iter() {
            map = &mut map.entry(*key).or_default().subtimers;
        }
        map
    }

    fn active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (last, path) = self.stack.split_last()?;
        let mut map = &mut self.subtimers;
        for key in path {
            map = &mut map.entry(*key).or_default().subtimers;
        }
        map.get_mut(last)
    }

    pub fn reset_timer(&mut self, key: &'static str) {
        self.subtimers.entry(key).or_default().reset();
    }

    /// starts a timer with name `key` as a child of the current timer
    pub fn start_as_current(&mut self, key: &'static str) {
        self.active_subtimers().entry(key).or_default().start();
        self.stack.push(key);
    }

    /// stops the current timer
    pub fn stop_current(&mut self) {
        if let Some(timer) = self.active_timer() {
            timer.stop();
        }
        self.stack.pop();
    }

    //Suspend every timer in the collection.   Used for notimeit!
    pub fn suspend(&mut self) {
        self.subtimers.values_mut().for_each(InnerTimer::suspend);
    }

    //Resume every timer in the collection.   Used for notimeit!
    pub fn resume(&mut self) {
        self.subtimers.values_mut().for_each(InnerTimer::resume);
    }

    /// total time of all top level timers
    pub fn total_time(&self) -> Duration {
        self.subtimers
            .values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    /// elapsed time of a timer given by its path of keys
    pub fn elapsed(&self, path: &[&'static str]) -> Option<Duration> {
        let (first, rest) = path.split_first()?;
        let mut timer = self.subtimers.get(first)?;
        for key in rest {
            timer = timer.subtimers.get(key)?;
        }
        Some(timer.elapsed)
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {

        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[test]
fn test_nested_timers() {
    let mut timers = Timers::default();

    timeit! {timers => "outer"; {
        timeit!{timers => "inner"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
        notimeit!{timers; {
            std::thread::sleep(Duration::from_millis(5));
        }}
    }}

    let outer = timers.elapsed(&["outer"]).unwrap();
    let inner = timers.elapsed(&["outer", "inner"]).unwrap();
    assert!(inner >= Duration::from_millis(2));
    assert!(outer >= inner);
    assert_eq!(timers.total_time(), outer);
    assert!(timers.elapsed(&["missing"]).is_none());

    timers.reset_timer("outer");
    assert_eq!(timers.total_time(), Duration::ZERO);
}
