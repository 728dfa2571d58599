//! Mock course content collaborator.
//!
//! Queued results are consumed in order per endpoint; an empty queue yields
//! a generated success. Every request is recorded for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::course::{CourseStructure, ModuleOutline};
use crate::domain::foundation::{ContentId, CourseId, UploadId};
use crate::ports::{
    ApiError, GeneratedCourse, GenerationApi, GenerationRequest, PublishApi, PublishRequest,
    PublishedCourse, UploadApi, UploadRequest,
};

#[derive(Debug, Clone, Default)]
pub struct MockContentApi {
    uploads: Arc<Mutex<VecDeque<Result<UploadId, ApiError>>>>,
    generations: Arc<Mutex<VecDeque<Result<GeneratedCourse, ApiError>>>>,
    publishes: Arc<Mutex<VecDeque<Result<PublishedCourse, ApiError>>>>,
    upload_calls: Arc<Mutex<Vec<UploadRequest>>>,
    generate_calls: Arc<Mutex<Vec<GenerationRequest>>>,
    publish_calls: Arc<Mutex<Vec<PublishRequest>>>,
}

impl MockContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an upload id to return.
    pub fn with_upload_id(self, id: &str) -> Self {
        self.with_upload_result(Ok(UploadId::new(id).expect("upload id must not be blank")))
    }

    pub fn with_upload_result(self, result: Result<UploadId, ApiError>) -> Self {
        self.uploads.lock().unwrap().push_back(result);
        self
    }

    pub fn with_generation_result(self, result: Result<GeneratedCourse, ApiError>) -> Self {
        self.generations.lock().unwrap().push_back(result);
        self
    }

    pub fn with_publish_result(self, result: Result<PublishedCourse, ApiError>) -> Self {
        self.publishes.lock().unwrap().push_back(result);
        self
    }

    /// A generated course with one module per title, two sections each.
    pub fn generated(content_id: &str, title: &str, modules: &[&str]) -> GeneratedCourse {
        GeneratedCourse {
            content_id: ContentId::new(content_id).expect("content id must not be blank"),
            title: title.to_string(),
            course_structure: CourseStructure {
                modules: modules
                    .iter()
                    .map(|m| ModuleOutline {
                        title: m.to_string(),
                        section_count: 2,
                    })
                    .collect(),
            },
        }
    }

    pub fn upload_calls(&self) -> Vec<UploadRequest> {
        self.upload_calls.lock().unwrap().clone()
    }

    pub fn generate_calls(&self) -> Vec<GenerationRequest> {
        self.generate_calls.lock().unwrap().clone()
    }

    pub fn publish_calls(&self) -> Vec<PublishRequest> {
        self.publish_calls.lock().unwrap().clone()
    }

    /// Total requests across all three endpoints.
    pub fn call_count(&self) -> usize {
        self.upload_calls.lock().unwrap().len()
            + self.generate_calls.lock().unwrap().len()
            + self.publish_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UploadApi for MockContentApi {
    async fn upload(&self, request: UploadRequest) -> Result<UploadId, ApiError> {
        let n = {
            let mut calls = self.upload_calls.lock().unwrap();
            calls.push(request);
            calls.len()
        };

        match self.uploads.lock().unwrap().pop_front() {
            Some(result) => result,
            None => UploadId::new(format!("upload-{}", n))
                .map_err(|e| ApiError::UnexpectedShape(e.to_string())),
        }
    }
}

#[async_trait]
impl GenerationApi for MockContentApi {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedCourse, ApiError> {
        let title = request.title.clone();
        self.generate_calls.lock().unwrap().push(request);

        match self.generations.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(Self::generated("content-1", &title, &["Introduction"])),
        }
    }
}

#[async_trait]
impl PublishApi for MockContentApi {
    async fn publish(&self, request: PublishRequest) -> Result<PublishedCourse, ApiError> {
        let enrolled = request.employee_ids.len() as u32;
        self.publish_calls.lock().unwrap().push(request);

        match self.publishes.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(PublishedCourse {
                course_id: CourseId::new("course-1")
                    .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?,
                enrollment_ids: (1..=enrolled).map(|i| format!("enrollment-{}", i)).collect(),
                enrollment_count: enrolled,
            }),
        }
    }
}
