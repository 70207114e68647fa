//! Scripted collaborators for page tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::Coach;
use crate::chat::gateway::{CompletionRequest, CompletionService, ServiceError};
use crate::geo::{GeocodeError, Geocoder, Place};

type Reply = Result<String, ServiceError>;

/// Answers completion calls from a queue and records every request.
#[derive(Clone, Default)]
pub struct ScriptedService {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedService {
    pub fn replying(text: &str) -> Self {
        let service = Self::default();
        service.push(Ok(text.to_string()));
        service
    }

    pub fn failing(status: u16, message: &str) -> Self {
        let service = Self::default();
        service.push(Err(ServiceError::Api {
            status,
            message: message.to_string(),
        }));
        service
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Malformed("no scripted reply".to_string())))
    }
}

/// Resolves a fixed set of names; everything else is not found.
#[derive(Clone, Default)]
pub struct FixedGeocoder {
    places: Vec<(String, Place)>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FixedGeocoder {
    pub fn with(mut self, query: &str, latitude: f64, longitude: f64, display_name: &str) -> Self {
        self.places.push((
            query.to_string(),
            Place {
                latitude,
                longitude,
                display_name: display_name.to_string(),
            },
        ));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn search(&self, query: &str) -> Result<Place, GeocodeError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.places
            .iter()
            .find(|(name, _)| name == query)
            .map(|(_, place)| place.clone())
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))
    }
}

pub fn coach(service: &ScriptedService, geocoder: &FixedGeocoder) -> Coach {
    Coach::new(Box::new(service.clone()), Box::new(geocoder.clone()), "gpt-4")
}
