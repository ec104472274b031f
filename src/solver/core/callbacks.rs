// ---------------------------------
// enum for managing callbacks
// ---------------------------------

/// Observer closure invoked once per iteration with the solver info
pub type IterationCallbackFcn<I> = Box<dyn FnMut(&I) + Send>;

#[derive(Default)]
pub(crate) enum Callback<I> {
    #[default]
    None,
    Rust(IterationCallbackFcn<I>),
}

impl<I> std::fmt::Debug for Callback<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Callback::None => write!(f, "None"),
            Callback::Rust(_) => write!(f, "Rust(<closure>)"),
        }
    }
}

impl<I> Callback<I> {
    fn call(&mut self, info: &I) {
        match self {
            Callback::None => {}
            Callback::Rust(f) => f(info),
        }
    }
}

#[derive(Debug)]
pub(crate) struct SolverCallbacks<I> {
    /// observer for per iteration progress
    pub iteration_callback: Callback<I>,
}

impl<I> Default for SolverCallbacks<I> {
    fn default() -> Self {
        Self {
            iteration_callback: Callback::None,
        }
    }
}

impl<I> SolverCallbacks<I> {
    pub(crate) fn notify_iteration(&mut self, info: &I) {
        self.iteration_callback.call(info)
    }
}

#[test]
fn test_callback_notify() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut callbacks = SolverCallbacks::<u32>::default();
    callbacks.notify_iteration(&0);

    callbacks.iteration_callback = Callback::Rust(Box::new(move |&i| {
        sink.lock().unwrap().push(i);
    }));
    callbacks.notify_iteration(&1);
    callbacks.notify_iteration(&2);

    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    assert_eq!(format!("{:?}", callbacks.iteration_callback), "Rust(<closure>)");
}
