//! Splits a dropped file list into accepted, oversized and wrong-type files.

use crate::config::DropZoneConfig;
use crate::file::FileDescriptor;
use crate::notify::{DropNotification, ErrorResult, ProcessResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Classification<F> {
    pub accepted: Vec<F>,
    pub invalid_size: Vec<F>,
    pub invalid_type: Vec<F>,
}

impl<F> Default for Classification<F> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            invalid_size: Vec::new(),
            invalid_type: Vec::new(),
        }
    }
}

/// Type membership is checked before size, so a file that fails both is
/// reported as wrong-type. Each bucket keeps drop order.
pub fn classify<F, I>(files: I, config: &DropZoneConfig) -> Classification<F>
where
    F: FileDescriptor,
    I: IntoIterator<Item = F>,
{
    let mut out = Classification::default();
    for file in files {
        if !config.accepts_type(&file.mime_type()) {
            out.invalid_type.push(file);
        } else if !config.accepts_size(file.size()) {
            out.invalid_size.push(file);
        } else {
            out.accepted.push(file);
        }
    }
    out
}

impl<F> Classification<F> {
    pub fn len(&self) -> usize {
        self.accepted.len() + self.invalid_size.len() + self.invalid_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_rejections(&self) -> bool {
        !self.invalid_size.is_empty() || !self.invalid_type.is_empty()
    }

    /// Process result first, then an error result only when something was
    /// rejected.
    pub fn into_notifications(self) -> Vec<DropNotification<F>> {
        let (process, error) = self.split();
        let mut out = vec![DropNotification::Process(process)];
        if let Some(error) = error {
            out.push(DropNotification::Error(error));
        }
        out
    }

    pub fn split(self) -> (ProcessResult<F>, Option<ErrorResult<F>>) {
        let has_rejections = self.has_rejections();
        let process = ProcessResult {
            accepted_files: self.accepted,
        };
        let error = has_rejections.then(|| ErrorResult {
            invalid_size_files: self.invalid_size,
            invalid_type_files: self.invalid_type,
        });
        (process, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::DroppedFile;
    use rstest::{fixture, rstest};

    #[fixture]
    fn pdf_only() -> DropZoneConfig {
        DropZoneConfig::new(vec!["application/pdf".to_string()], 100)
    }

    #[rstest]
    fn mixed_drop_lands_in_three_buckets(pdf_only: DropZoneConfig) {
        let small = DroppedFile::new("a.pdf", "application/pdf", 50);
        let large = DroppedFile::new("b.pdf", "application/pdf", 200);
        let text = DroppedFile::new("c.txt", "text/plain", 10);

        let result = classify(vec![small.clone(), large.clone(), text.clone()], &pdf_only);

        assert_eq!(result.accepted, vec![small]);
        assert_eq!(result.invalid_size, vec![large]);
        assert_eq!(result.invalid_type, vec![text]);
    }

    #[rstest]
    fn empty_drop_yields_only_process(pdf_only: DropZoneConfig) {
        let result = classify(Vec::<DroppedFile>::new(), &pdf_only);
        assert!(result.is_empty());

        let notifications = result.into_notifications();
        assert_eq!(
            notifications,
            vec![DropNotification::Process(ProcessResult {
                accepted_files: Vec::new()
            })]
        );
    }

    #[rstest]
    #[case("application/pdf", 100, true)]
    #[case("application/pdf", 0, true)]
    #[case("application/pdf", 101, false)]
    #[case("text/plain", 1, false)]
    #[case("", 1, false)]
    fn accepted_iff_type_and_size_match(
        pdf_only: DropZoneConfig,
        #[case] mime_type: &str,
        #[case] size: u64,
        #[case] accepted: bool,
    ) {
        let file = DroppedFile::new("f", mime_type, size);
        let result = classify([&file], &pdf_only);
        assert_eq!(result.accepted.len() == 1, accepted);
        assert_eq!(result.len(), 1);
    }

    #[rstest]
    fn oversized_wrong_type_counts_as_wrong_type(pdf_only: DropZoneConfig) {
        let file = DroppedFile::new("big.txt", "text/plain", 10_000);
        let result = classify([file.clone()], &pdf_only);
        assert!(result.invalid_size.is_empty());
        assert_eq!(result.invalid_type, vec![file]);
    }

    #[rstest]
    fn every_file_lands_in_exactly_one_bucket(pdf_only: DropZoneConfig) {
        let files: Vec<DroppedFile> = (0..40u64)
            .map(|i| {
                let mime_type = if i % 3 == 0 { "image/png" } else { "application/pdf" };
                DroppedFile::new(format!("file-{i}"), mime_type, i * 7)
            })
            .collect();

        let result = classify(files.iter(), &pdf_only);
        assert_eq!(result.len(), files.len());

        for file in &files {
            let hits = [&result.accepted, &result.invalid_size, &result.invalid_type]
                .iter()
                .filter(|bucket| bucket.iter().any(|f| f.name == file.name))
                .count();
            assert_eq!(hits, 1, "{} landed in {hits} buckets", file.name);
        }
    }

    #[rstest]
    fn buckets_keep_drop_order(pdf_only: DropZoneConfig) {
        let files = vec![
            DroppedFile::new("3.pdf", "application/pdf", 3),
            DroppedFile::new("1.pdf", "application/pdf", 1),
            DroppedFile::new("2.pdf", "application/pdf", 2),
        ];
        let result = classify(files.clone(), &pdf_only);
        assert_eq!(result.accepted, files);
    }

    #[rstest]
    fn rejections_add_error_notification(pdf_only: DropZoneConfig) {
        let ok = DroppedFile::new("ok.pdf", "application/pdf", 1);
        let bad = DroppedFile::new("bad.json", "application/json", 1);

        let notifications = classify(vec![ok.clone(), bad.clone()], &pdf_only).into_notifications();

        assert_eq!(
            notifications,
            vec![
                DropNotification::Process(ProcessResult {
                    accepted_files: vec![ok]
                }),
                DropNotification::Error(ErrorResult {
                    invalid_size_files: Vec::new(),
                    invalid_type_files: vec![bad],
                }),
            ]
        );
    }
}
