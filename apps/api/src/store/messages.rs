use tracing::info;

use crate::errors::AppError;
use crate::messaging::threads::{build_threads, conversation, ThreadSummary};
use crate::models::job::JobPostStatus;
use crate::models::message::Message;
use crate::store::users::UNKNOWN_MEMBER;
use crate::store::visibility::can_view_profile;
use crate::store::{new_id, now_millis, MockDb, Tables};

impl Tables {
    /// Appends a message after validating both participants and the content.
    fn push_message(
        &mut self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<Message, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("Message content is empty".to_string()));
        }
        if sender_id == receiver_id {
            return Err(AppError::Validation(
                "Cannot send a message to yourself".to_string(),
            ));
        }
        if self.user(receiver_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Recipient {receiver_id} not found"
            )));
        }

        let message = Message {
            id: new_id(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            timestamp: now_millis(),
            read: false,
        };
        self.messages.push(message.clone());

        info!("Message {} sent {sender_id} -> {receiver_id}", message.id);
        Ok(message)
    }
}

/// Prefix identifying a job application in the employer's inbox.
pub fn application_content(job_title: &str, body: &str) -> String {
    format!("APPLICATION FOR {}:\n\n{}", job_title.to_uppercase(), body.trim())
}

impl MockDb {
    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<Message, AppError> {
        let mut tables = self.tables.write().await;
        let sender = tables.require_user(sender_id)?;
        tables.push_message(&sender.id, receiver_id, content)
    }

    /// Sends an application message to the employer behind an active job post.
    pub async fn apply_to_job(
        &self,
        applicant_id: &str,
        job_id: &str,
        content: &str,
    ) -> Result<Message, AppError> {
        let mut tables = self.tables.write().await;
        let applicant = tables.require_user(applicant_id)?;
        let job = tables
            .jobs
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job post {job_id} not found")))?;
        if job.status != JobPostStatus::Active {
            return Err(AppError::Validation(format!(
                "Job post {job_id} is not accepting applications"
            )));
        }
        if content.trim().is_empty() {
            return Err(AppError::Validation("Message content is empty".to_string()));
        }

        tables.push_message(
            &applicant.id,
            &job.employer_id,
            &application_content(&job.title, content),
        )
    }

    /// Messages the owner of a profile the sender is allowed to see.
    pub async fn contact_candidate(
        &self,
        sender_id: &str,
        profile_id: &str,
        content: &str,
    ) -> Result<Message, AppError> {
        let mut tables = self.tables.write().await;
        let sender = tables.require_user(sender_id)?;
        let profile = tables
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile {profile_id} not found")))?;
        if !can_view_profile(profile, Some(&sender)) {
            return Err(AppError::Forbidden(
                "This profile is not visible to you".to_string(),
            ));
        }
        let owner_id = profile.user_id.clone();

        tables.push_message(&sender.id, &owner_id, content)
    }

    pub async fn threads(&self, user_id: &str) -> Result<Vec<ThreadSummary>, AppError> {
        let tables = self.tables.read().await;
        let user = tables.require_user(user_id)?;
        Ok(build_threads(&tables.messages, &user.id, |id| {
            tables
                .user(id)
                .map(|u| u.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_MEMBER.to_string())
        }))
    }

    /// Returns the conversation with `other_id`, oldest first, and marks the
    /// messages `other_id` sent to the member as read.
    pub async fn open_thread(&self, user_id: &str, other_id: &str) -> Result<Vec<Message>, AppError> {
        let mut tables = self.tables.write().await;
        let user = tables.require_user(user_id)?;

        let mut marked = 0;
        for m in tables
            .messages
            .iter_mut()
            .filter(|m| m.receiver_id == user.id && m.sender_id == other_id && !m.read)
        {
            m.read = true;
            marked += 1;
        }
        if marked > 0 {
            info!("Marked {marked} messages from {other_id} read for {}", user.id);
        }

        Ok(conversation(&tables.messages, &user.id, other_id)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn unread_count(&self, user_id: &str) -> Result<usize, AppError> {
        let tables = self.tables.read().await;
        let user = tables.require_user(user_id)?;
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.receiver_id == user.id && !m.read)
            .count())
    }
}
