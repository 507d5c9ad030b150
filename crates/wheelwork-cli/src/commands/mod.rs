pub mod config;
pub mod queue;
pub mod stats;
pub mod task;
pub mod timer;
pub mod wheel;

use serde::Serialize;
use wheelwork_core::{Config, CoreError, Event, Session, TaskStore};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

const SESSION_KEY: &str = "session";

/// Store, config and the persisted session for one invocation.
pub struct Context {
    pub store: TaskStore,
    pub config: Config,
    pub session: Session,
}

impl Context {
    pub fn open() -> Result<Self, CoreError> {
        let store = TaskStore::open()?;
        let config = Config::load()?;
        let session = load_session(&store, &config);
        Ok(Self {
            store,
            config,
            session,
        })
    }

    pub fn save(&self) -> Result<(), CoreError> {
        let json = serde_json::to_string(&self.session)?;
        self.store.kv_set(SESSION_KEY, &json)?;
        Ok(())
    }
}

/// Restore the session, applying the current config on top.
fn load_session(store: &TaskStore, config: &Config) -> Session {
    let restored = store
        .kv_get(SESSION_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str::<Session>(&json).ok());
    match restored {
        Some(mut session) => {
            session.set_wheel(config.wheel);
            session.set_durations(config.durations());
            session
        }
        None => Session::new(config.wheel, config.durations()),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Events go out as one JSON array; an empty command still prints a snapshot.
pub fn print_events(session: &Session, events: Vec<Event>) -> Result<(), serde_json::Error> {
    if events.is_empty() {
        print_json(&[session.snapshot()])
    } else {
        print_json(&events)
    }
}
