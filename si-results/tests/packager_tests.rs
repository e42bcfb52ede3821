use pretty_assertions::assert_eq;
use si_archive::ResultsReader;
use si_crypto::ReviewerKeyPair;
use si_results::{
    FsStorage, JobInfo, JobProgress, RecipientKey, ResultsError, ResultsPackager, ResultsStorage,
    ENCRYPTED_LOGS_FILENAME, PACKAGING_FAILURE_FILENAME, PACKAGING_FAILURE_MESSAGE,
};

fn enrolled_reviewer() -> (ReviewerKeyPair, RecipientKey) {
    let keypair = ReviewerKeyPair::generate();
    let recipient = RecipientKey {
        public_key: keypair.public_bytes().to_vec(),
        fingerprint: keypair.fingerprint(),
    };
    (keypair, recipient)
}

fn job() -> JobInfo {
    JobInfo {
        org_slug: "openstax".into(),
        study_id: "study-1".into(),
        job_id: "job-9".into(),
    }
}

#[tokio::test]
async fn stores_results_that_the_reviewer_can_decrypt() {
    let dir = tempfile::tempdir().unwrap();
    let packager = ResultsPackager::new(FsStorage::new(dir.path()));
    let (keypair, recipient) = enrolled_reviewer();
    let job = job();

    let files = vec![("job_results.csv".to_string(), b"id,count\n1,7\n".to_vec())];
    let key = packager
        .store_results(&job, &[recipient], &files)
        .await
        .unwrap();
    assert_eq!(key, "openstax/studies/study-1/jobs/job-9/results/encrypted-results.zip");

    let archive = packager.fetch_encrypted_results(&job).await.unwrap();
    let mut reader =
        ResultsReader::new(archive, &keypair.secret, &keypair.fingerprint()).unwrap();
    let decrypted = reader.extract_files().unwrap();

    assert_eq!(decrypted.len(), 1);
    assert_eq!(decrypted[0].path, "job_results.csv");
    assert_eq!(decrypted[0].contents, b"id,count\n1,7\n");
}

#[tokio::test]
async fn zero_recipients_aborts_the_packaging_step() {
    let dir = tempfile::tempdir().unwrap();
    let packager = ResultsPackager::new(FsStorage::new(dir.path()));
    let job = job();

    let files = vec![("job_results.csv".to_string(), b"data".to_vec())];
    let result = packager.store_results(&job, &[], &files).await;
    assert!(matches!(result, Err(ResultsError::Archive(_))));

    // Nothing was persisted.
    assert!(!packager
        .storage()
        .exists(&job.results_path("encrypted-results.zip"))
        .await
        .unwrap());
}

#[tokio::test]
async fn build_error_log_round_trips_through_the_decrypt_flow() {
    let dir = tempfile::tempdir().unwrap();
    let packager = ResultsPackager::new(FsStorage::new(dir.path()));
    let (keypair, recipient) = enrolled_reviewer();
    let job = job();

    let stored = packager
        .store_build_error_log(&job, JobProgress::default(), &[recipient])
        .await
        .unwrap();
    assert!(stored);

    let archive = packager.fetch_encrypted_log(&job).await.unwrap();
    let mut reader =
        ResultsReader::new(archive, &keypair.secret, &keypair.fingerprint()).unwrap();
    let files = reader.extract_files().unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, PACKAGING_FAILURE_FILENAME);
    assert_eq!(
        String::from_utf8(files[0].contents.clone()).unwrap(),
        PACKAGING_FAILURE_MESSAGE
    );
}

#[tokio::test]
async fn build_error_log_skipped_after_ready_or_when_log_exists() {
    let dir = tempfile::tempdir().unwrap();
    let packager = ResultsPackager::new(FsStorage::new(dir.path()));
    let (_, recipient) = enrolled_reviewer();
    let job = job();

    let progress = JobProgress {
        reached_ready: true,
        has_encrypted_log: false,
    };
    assert!(!packager
        .store_build_error_log(&job, progress, std::slice::from_ref(&recipient))
        .await
        .unwrap());

    let progress = JobProgress {
        reached_ready: false,
        has_encrypted_log: true,
    };
    assert!(!packager
        .store_build_error_log(&job, progress, &[recipient])
        .await
        .unwrap());

    assert!(!packager
        .storage()
        .exists(&job.results_path(ENCRYPTED_LOGS_FILENAME))
        .await
        .unwrap());
}

#[tokio::test]
async fn build_error_log_skipped_when_org_has_no_keys() {
    let dir = tempfile::tempdir().unwrap();
    let packager = ResultsPackager::new(FsStorage::new(dir.path()));
    let job = job();

    // Unlike the normal results path this is a silent skip, not an error:
    // the job is already failing and there is nobody to encrypt for.
    let stored = packager
        .store_build_error_log(&job, JobProgress::default(), &[])
        .await
        .unwrap();
    assert!(!stored);
}
