//! Ordered collection of job listings from one provider response.

use serde::{Deserialize, Serialize};

use super::Job;

/// Ordered sequence of [`Job`] values, preserving response order.
///
/// Length equals the number of raw records parsed from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    jobs: Vec<Job>,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `capacity` jobs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jobs: Vec::with_capacity(capacity),
        }
    }

    /// Appends a job, keeping insertion order.
    pub fn push(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Number of jobs in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when the collection holds no jobs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Returns the job at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    /// Borrows the jobs as a slice.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Iterates the jobs in response order.
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    /// Returns a new collection holding only the jobs matching `predicate`,
    /// preserving order.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&Job) -> bool) -> Self {
        Self {
            jobs: self.jobs.iter().filter(|job| predicate(job)).cloned().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = Job;
    type IntoIter = std::vec::IntoIter<Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

impl FromIterator<Job> for Collection {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self {
            jobs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Collection {
        ["CDL Driver", "Marketing Rep", "Repair Technician"]
            .into_iter()
            .map(Job::new)
            .collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let mut collection = Collection::new();
        collection.push(Job::new("first"));
        collection.push(Job::new("second"));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(0).unwrap().title, "first");
        assert_eq!(collection.get(1).unwrap().title, "second");
    }

    #[test]
    fn test_empty_collection() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.get(0).is_none());
    }

    #[test]
    fn test_iteration_in_order() {
        let collection = sample();
        let titles: Vec<&str> = collection
            .jobs()
            .iter()
            .map(|j| j.title.as_str())
            .collect();
        assert_eq!(titles, ["CDL Driver", "Marketing Rep", "Repair Technician"]);
    }

    #[test]
    fn test_filter_keeps_matching_jobs_in_order() {
        let filtered = sample().filter(|job| job.title.contains('R'));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get(0).unwrap().title, "Marketing Rep");
        assert_eq!(filtered.get(1).unwrap().title, "Repair Technician");
    }

    #[test]
    fn test_serde_transparent_as_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
