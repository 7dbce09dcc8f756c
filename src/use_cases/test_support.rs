use std::sync::{Arc, Mutex};

use crate::domain::{Authorizer, EncodeError, EncodeSpec, EncodedSymbol, ErrorCorrection, QrEncoder};

// Owned copy of what the generator asked the encoder for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedSpec {
    pub data: String,
    pub level: ErrorCorrection,
    pub multiplier: u32,
    pub margin: u32,
}

#[derive(Clone, Copy, Default)]
pub(crate) enum StubOutcome {
    #[default]
    Png,
    Empty,
    Fail,
}

// Deterministic fake encoder that records every call.
#[derive(Clone, Default)]
pub(crate) struct RecordingEncoder {
    calls: Arc<Mutex<Vec<RecordedSpec>>>,
    outcome: StubOutcome,
}

impl RecordingEncoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_outcome(mut self, outcome: StubOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedSpec> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

impl QrEncoder for RecordingEncoder {
    fn encode_png(&self, spec: EncodeSpec<'_>) -> Result<EncodedSymbol, EncodeError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(RecordedSpec {
                data: spec.data.to_string(),
                level: spec.level,
                multiplier: spec.multiplier,
                margin: spec.margin,
            });

        match self.outcome {
            StubOutcome::Png => {
                // Payload derived from the input so distinct specs stay distinct.
                let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
                png.extend_from_slice(spec.data.as_bytes());
                png.push(spec.multiplier as u8);
                Ok(EncodedSymbol {
                    png,
                    edge_px: (21 + 2 * spec.margin) * spec.multiplier,
                })
            }
            StubOutcome::Empty => Ok(EncodedSymbol {
                png: Vec::new(),
                edge_px: 0,
            }),
            StubOutcome::Fail => Err(EncodeError::Symbol(
                "data too long at /tmp/qrcode_abc123".to_string(),
            )),
        }
    }
}

// Fixed yes/no authorizer for use-case tests.
pub(crate) struct FixedAuthorizer(pub(crate) bool);

impl Authorizer for FixedAuthorizer {
    fn is_authorized(&self, _nonce: Option<&str>) -> bool {
        self.0
    }
}
