//! Enrollment: pass purchase and event selection.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use fest_core::error::AppError;
use fest_database::repositories::event::EventRepository;
use fest_database::repositories::pass::PassRepository;
use fest_database::repositories::registration::RegistrationRepository;
use fest_entity::event::Event;
use fest_entity::pass::Pass;
use fest_entity::registration::{CreateRegistration, Registration};

/// Handles participant enrollment.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// Registration repository.
    registration_repo: Arc<RegistrationRepository>,
    /// Pass repository.
    pass_repo: Arc<PassRepository>,
    /// Event repository.
    event_repo: Arc<EventRepository>,
}

/// Data for a new enrollment, before the amount is derived.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EnrollmentRequest {
    /// Participant name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Participant phone number.
    pub phone: Option<String>,
    /// Participant's college.
    pub college: Option<String>,
    /// Participant's department.
    pub department: String,
    /// Participant's year of study.
    pub year: String,
    /// Pass being purchased, if any.
    pub pass_id: Option<Uuid>,
    /// Events the participant is enrolling in.
    pub event_ids: Vec<Uuid>,
    /// External payment reference, if already available.
    pub payment_ref: Option<String>,
}

/// A registration with its linked events and pass.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegistrationDetail {
    /// The registration row.
    pub registration: Registration,
    /// Events the participant enrolled in.
    pub events: Vec<Event>,
    /// The purchased pass, if any.
    pub pass: Option<Pass>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        registration_repo: Arc<RegistrationRepository>,
        pass_repo: Arc<PassRepository>,
        event_repo: Arc<EventRepository>,
    ) -> Self {
        Self {
            registration_repo,
            pass_repo,
            event_repo,
        }
    }

    /// Enrolls a participant. The pass must exist and be active, every
    /// referenced event must exist, and the amount is derived from the
    /// pass price. Payment starts as `pending`.
    pub async fn enroll(&self, req: EnrollmentRequest) -> Result<Registration, AppError> {
        if req.pass_id.is_none() && req.event_ids.is_empty() {
            return Err(AppError::validation(
                "Select a pass or at least one event to register",
            ));
        }

        let amount = match req.pass_id {
            Some(pass_id) => {
                let pass = self
                    .pass_repo
                    .find_by_id(pass_id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Pass {pass_id} not found")))?;
                if !pass.is_active {
                    return Err(AppError::validation(format!(
                        "Pass '{}' is no longer available",
                        pass.name
                    )));
                }
                pass.amount_display()
            }
            None => "0/-".to_string(),
        };

        if !req.event_ids.is_empty() {
            let missing = self.event_repo.find_missing(&req.event_ids).await?;
            if !missing.is_empty() {
                return Err(AppError::validation(format!(
                    "Unknown event ids: {}",
                    missing
                        .iter()
                        .map(Uuid::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
        }

        let registration = self
            .registration_repo
            .create(&CreateRegistration {
                name: req.name,
                email: req.email,
                phone: req.phone,
                college: req.college,
                department: req.department,
                year: req.year,
                pass_id: req.pass_id,
                event_ids: req.event_ids,
                amount,
                payment_ref: req.payment_ref,
            })
            .await?;

        info!(
            registration_id = %registration.id,
            amount = %registration.amount,
            "Participant enrolled"
        );

        Ok(registration)
    }

    /// Loads a registration with its linked events and pass.
    pub async fn detail(&self, id: Uuid) -> Result<RegistrationDetail, AppError> {
        let registration = self
            .registration_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Registration {id} not found")))?;

        let events = self.registration_repo.find_events(id).await?;
        let pass = match registration.pass_id {
            Some(pass_id) => self.pass_repo.find_by_id(pass_id).await?,
            None => None,
        };

        Ok(RegistrationDetail {
            registration,
            events,
            pass,
        })
    }
}
