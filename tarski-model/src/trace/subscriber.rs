use serde_derive::{Deserialize, Serialize};
use std::{
    fmt,
    fs::File,
    io::{self, Write},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::{field, span, subscriber::Subscriber, Event, Metadata};

/// Thread safe json logger that writes a [`ModelCheckRecord`] into a given log file for every
/// model check that it observes.
pub struct JsonLogger {
    log_file: Mutex<File>,
    model_check_record: Mutex<ModelCheckRecord>,
    next_id: AtomicU64,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            model_check_record: Mutex::new(ModelCheckRecord::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn write_record(&self, record: &ModelCheckRecord) -> io::Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        let mut file = self
            .log_file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock is poisoned"))?;
        writeln!(file, "{}", json)
    }
}

impl Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, span: &span::Attributes) -> span::Id {
        let mut recorder = Recorder::new();
        span.record(&mut recorder);
        if let Ok(mut record) = self.model_check_record.lock() {
            *record = ModelCheckRecord::new();
            record.universe = recorder.universe;
            record.axiom_count = recorder.axioms;
        }
        span::Id::from_u64(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn record(&self, _span: &span::Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        if let Some(event_type) = &recorder.event {
            let mut record = match self.model_check_record.lock() {
                Ok(record) => record,
                Err(_) => return,
            };
            match event_type.as_ref() {
                super::AXIOM => {
                    if let Ok(axiom) = AxiomRecord::try_from(recorder) {
                        record.axioms.push(axiom);
                    }
                }
                super::MODEL | super::REJECT => {
                    record.outcome = recorder.event;
                    record.reason = recorder.reason;
                }
                _ => (),
            }
        }
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {
        let record = match self.model_check_record.lock() {
            Ok(record) => record,
            Err(_) => return,
        };
        if let Err(e) = self.write_record(&record) {
            eprintln!("unable to write the model check record: {}", e);
        }
    }
}

/// Log information associated to a model check: the size of the universe, the axioms that
/// were evaluated and whether the candidate was accepted.
#[derive(Serialize, Default)]
struct ModelCheckRecord {
    universe: Option<u64>,
    axiom_count: Option<u64>,
    axioms: Vec<AxiomRecord>,
    outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ModelCheckRecord {
    fn new() -> Self {
        Self::default()
    }
}

/// A record, containing an axiom and its truth value in the candidate model.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct AxiomRecord {
    axiom: String,
    holds: bool,
}

impl AxiomRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        match (value.axiom, value.holds) {
            (Some(axiom), Some(holds)) => Ok(AxiomRecord { axiom, holds }),
            _ => Err(()),
        }
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the triggering event,
/// `Recorder` will be converted to its corresponding log record.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    universe: Option<u64>,
    axioms: Option<u64>,
    axiom: Option<String>,
    holds: Option<bool>,
    reason: Option<String>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder::default()
    }
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            super::UNIVERSE_FIELD => self.universe = Some(value),
            super::AXIOMS_FIELD => self.axioms = Some(value),
            _ => (),
        }
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == super::HOLDS_FIELD {
            self.holds = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == super::EVENT_FIELD {
            self.event = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::AXIOM_FIELD => self.axiom = Some(format!("{:?}", value)),
            super::REASON_FIELD => self.reason = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
