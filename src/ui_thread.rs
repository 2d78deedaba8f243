// One long-lived thread that owns every window this library opens
//
// The windowing layer allows a single event loop per process and eframe keeps
// it in a thread-local, so all `run_native` calls have to happen on the same
// thread for the loop to be reused.
use crate::error::{Result, UiError};
use crate::platform;
use log::error;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

type Job = Box<dyn FnOnce() + Send + 'static>;

static UI_THREAD: Mutex<Option<Sender<Job>>> = Mutex::new(None);

thread_local! {
    static ON_UI_THREAD: Cell<bool> = const { Cell::new(false) };
}

fn is_ui_thread() -> bool {
    ON_UI_THREAD.with(Cell::get)
}

fn spawn_ui_thread() -> Result<Sender<Job>> {
    let (job_tx, job_rx) = mpsc::channel::<Job>();

    std::thread::Builder::new()
        .name("optiblink-ui".to_string())
        .spawn(move || {
            ON_UI_THREAD.with(|flag| flag.set(true));
            for job in job_rx {
                // A panicking window must not take the event loop down with it
                if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                    error!("UI job panicked");
                }
            }
        })?;

    Ok(job_tx)
}

fn submit(job: Job) -> Result<()> {
    let mut guard = UI_THREAD.lock().unwrap_or_else(|e| e.into_inner());

    let sender = match guard.as_ref() {
        Some(sender) => sender.clone(),
        None => {
            let sender = spawn_ui_thread()?;
            *guard = Some(sender.clone());
            sender
        }
    };

    sender
        .send(job)
        .map_err(|_| UiError::Thread("UI thread is no longer running".to_string()))
}

/// Run `job` on the UI thread and return a receiver for its result.
///
/// Called from the UI thread itself (for example from a completion
/// callback), or on platforms where windows must stay on the main thread,
/// the job runs inline before this returns.
pub fn dispatch<T, F>(job: F) -> Result<Receiver<Result<T>>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (reply_tx, reply_rx) = mpsc::channel();

    if is_ui_thread() || !platform::supports_background_event_loop() {
        reply_tx.send(job()).ok();
        return Ok(reply_rx);
    }

    submit(Box::new(move || {
        // The caller may have stopped waiting
        reply_tx.send(job()).ok();
    }))?;

    Ok(reply_rx)
}

/// Wait for a dispatched job. A job that panicked shows up as `UiError::Thread`.
pub fn wait<T>(reply: Receiver<Result<T>>) -> Result<T> {
    reply
        .recv()
        .map_err(|_| UiError::Thread("UI job ended without a result".to_string()))?
}

/// [`dispatch`] then [`wait`]
pub fn run<T, F>(job: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    wait(dispatch(job)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::thread::ThreadId;

    thread_local! {
        // Stands in for the event loop eframe parks in a thread-local
        static PARKED_LOOP: RefCell<Option<u32>> = const { RefCell::new(None) };
    }

    #[test]
    fn test_jobs_share_one_thread() {
        let first: ThreadId = run(|| Ok(std::thread::current().id())).unwrap();
        let second: ThreadId = run(|| Ok(std::thread::current().id())).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_later_job_reuses_state_left_by_earlier_job() {
        let token = run(|| {
            PARKED_LOOP.with(|slot| {
                let mut slot = slot.borrow_mut();
                Ok(*slot.get_or_insert(7))
            })
        })
        .unwrap();

        let seen = run(|| Ok(PARKED_LOOP.with(|slot| *slot.borrow()))).unwrap();

        assert_eq!(seen, Some(token));
    }

    #[test]
    fn test_background_then_blocking_callers_share_the_thread() {
        // A non-blocking caller on another thread, then a blocking one here
        let background = std::thread::spawn(|| {
            dispatch(|| Ok(std::thread::current().id())).map(wait)
        })
        .join()
        .unwrap()
        .unwrap()
        .unwrap();

        let blocking: ThreadId = run(|| Ok(std::thread::current().id())).unwrap();

        if platform::supports_background_event_loop() {
            assert_eq!(background, blocking);
        }
    }

    #[test]
    fn test_job_error_is_returned() {
        let result: Result<()> = run(|| Err(UiError::Gui("no display".to_string())));
        assert!(matches!(result, Err(UiError::Gui(_))));
    }

    #[test]
    fn test_panicking_job_does_not_stop_the_thread() {
        if !platform::supports_background_event_loop() {
            // Jobs run inline on the caller there
            return;
        }
        let before: ThreadId = run(|| Ok(std::thread::current().id())).unwrap();

        let panicked: Result<()> = run(|| -> Result<()> { panic!("window construction blew up") });
        assert!(matches!(panicked, Err(UiError::Thread(_))));

        let after: ThreadId = run(|| Ok(std::thread::current().id())).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_nested_dispatch_runs_inline() {
        let (outer, inner) = run(|| {
            let outer = std::thread::current().id();
            let inner: ThreadId = run(|| Ok(std::thread::current().id()))?;
            Ok((outer, inner))
        })
        .unwrap();

        assert_eq!(outer, inner);
    }
}
