use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobPost, JobPostStatus};
use crate::store::{new_id, normalize, now_millis, MockDb};

impl MockDb {
    /// Creates or replaces a job post owned by `owner_id`. Only employers may
    /// post; an existing id must belong to the caller.
    pub async fn upsert_job(&self, owner_id: &str, job: JobPost) -> Result<JobPost, AppError> {
        let mut tables = self.tables.write().await;
        let owner = tables.require_user(owner_id)?;
        if !owner.is_employer() {
            return Err(AppError::Forbidden(
                "Only employers can publish job posts.".to_string(),
            ));
        }

        let mut job = normalize::job_post(job);
        if job.id.trim().is_empty() {
            job.id = new_id();
        }
        if job.company_name.trim().is_empty() {
            job.company_name = owner.full_name.clone();
        }
        job.employer_id = owner.id.clone();
        job.updated_at = now_millis();

        match tables.jobs.iter().position(|j| j.id == job.id) {
            Some(idx) => {
                if tables.jobs[idx].employer_id != owner.id {
                    return Err(AppError::Forbidden(format!(
                        "Job post {} belongs to another employer",
                        job.id
                    )));
                }
                tables.jobs[idx] = job.clone();
                info!("Updated job post {} for employer {}", job.id, owner.id);
            }
            None => {
                tables.jobs.push(job.clone());
                info!("Created job post {} for employer {}", job.id, owner.id);
            }
        }

        Ok(job)
    }

    pub async fn job(&self, id: &str) -> Result<JobPost, AppError> {
        self.tables
            .read()
            .await
            .jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job post {id} not found")))
    }

    pub async fn jobs_owned_by(&self, employer_id: &str) -> Vec<JobPost> {
        self.tables
            .read()
            .await
            .jobs
            .iter()
            .filter(|j| j.employer_id == employer_id)
            .cloned()
            .collect()
    }

    /// Job posts shown on the public job board.
    pub async fn active_jobs(&self) -> Vec<JobPost> {
        self.tables
            .read()
            .await
            .jobs
            .iter()
            .filter(|j| j.status == JobPostStatus::Active)
            .cloned()
            .collect()
    }

    pub async fn delete_job(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let owner = tables.require_user(owner_id)?;
        let idx = tables
            .jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Job post {id} not found")))?;
        if tables.jobs[idx].employer_id != owner.id {
            return Err(AppError::Forbidden(format!(
                "Job post {id} belongs to another employer"
            )));
        }

        tables.jobs.remove(idx);
        info!("Deleted job post {id} for employer {}", owner.id);
        Ok(())
    }
}
