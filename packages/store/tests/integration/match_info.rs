use ::common::{Character, MatchLinkType};
use store::{MatchInfo, StoreError, ValidationError, VideoHosts};

use crate::common::{FIGHTCADE_URL, TestStore, YOUTUBE_URL, uploaded_at};

fn fightcade_match() -> MatchInfo {
    MatchInfo::new(MatchLinkType::Fightcade, FIGHTCADE_URL)
        .with_characters(Character::Anakaris, Character::Victor)
}

mod required_fields {
    use super::*;

    #[tokio::test]
    async fn missing_source_type_is_rejected_and_nothing_is_written() {
        let app = TestStore::spawn().await;
        let record = MatchInfo {
            url: FIGHTCADE_URL.into(),
            ..Default::default()
        };

        let err = app.store.create_or_update(record).await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingRequiredFields)
        ));
        assert_eq!(app.match_count().await, 0);
    }

    #[tokio::test]
    async fn missing_url_is_rejected_and_nothing_is_written() {
        let app = TestStore::spawn().await;
        let record = MatchInfo::new(MatchLinkType::Video, "");

        let err = app.store.create_or_update(record).await.unwrap_err();

        assert_eq!(err.to_string(), "Validation error: MatchInfo requires a type/url");
        assert_eq!(app.match_count().await, 0);
    }
}

mod video_metadata {
    use super::*;

    #[tokio::test]
    async fn youtube_video_without_metadata_is_rejected() {
        let app = TestStore::spawn().await;
        let record = MatchInfo::new(MatchLinkType::Video, YOUTUBE_URL);

        let err = app.store.create_or_update(record).await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingVideoMetadata)
        ));
        assert_eq!(app.match_count().await, 0);
    }

    #[tokio::test]
    async fn youtube_video_missing_only_the_title_is_rejected() {
        let app = TestStore::spawn().await;
        let record = MatchInfo::new(MatchLinkType::Video, YOUTUBE_URL).with_video_metadata(
            "Bob",
            uploaded_at(),
            "",
        );

        let err = app.store.create_or_update(record).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn youtube_video_with_metadata_is_persisted() {
        let app = TestStore::spawn().await;
        let record = MatchInfo::new(MatchLinkType::Video, YOUTUBE_URL).with_video_metadata(
            "Bob",
            uploaded_at(),
            "Grand Finals",
        );
        let id = record.id;

        let before = chrono::Utc::now();
        let stored = app.store.create_or_update(record).await.unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.source_type, MatchLinkType::Video);
        assert_eq!(stored.uploader, "Bob");
        assert_eq!(stored.video_title, "Grand Finals");
        assert_eq!(stored.date_uploaded, Some(uploaded_at()));
        assert!(stored.created_at >= before);
        assert_eq!(stored.created_at, stored.modified_at);

        let persisted = app.find_match(id).await.expect("record should be stored");
        assert_eq!(persisted.url, YOUTUBE_URL);
        assert_eq!(persisted.created_at, stored.created_at);
    }

    #[tokio::test]
    async fn unrecognized_video_host_needs_no_metadata() {
        let app = TestStore::spawn().await;
        let record = MatchInfo::new(MatchLinkType::Video, "https://vimeo.com/76979871");

        let stored = app.store.create_or_update(record).await.unwrap();

        assert!(stored.uploader.is_empty());
        assert!(stored.date_uploaded.is_none());
        assert_eq!(app.match_count().await, 1);
    }

    #[tokio::test]
    async fn allow_list_comes_from_the_store_configuration() {
        let app = TestStore::spawn_with_hosts(VideoHosts::new(["vimeo.com"])).await;

        let vimeo = MatchInfo::new(MatchLinkType::Video, "https://vimeo.com/76979871");
        let err = app.store.create_or_update(vimeo).await.unwrap_err();
        assert!(err.is_validation());

        let youtube = MatchInfo::new(MatchLinkType::Video, YOUTUBE_URL);
        assert!(app.store.create_or_update(youtube).await.is_ok());
    }
}

mod winning_character {
    use super::*;

    #[tokio::test]
    async fn winner_played_by_player_one_is_persisted() {
        let app = TestStore::spawn().await;
        let record = fightcade_match().with_winner(Character::Anakaris);

        let stored = app.store.create_or_update(record).await.unwrap();

        assert_eq!(stored.source_type, MatchLinkType::Fightcade);
        assert_eq!(stored.winning_character, Some(Character::Anakaris));
        assert_eq!(stored.player1_character, Character::Anakaris);
        assert_eq!(stored.player2_character, Character::Victor);
    }

    #[tokio::test]
    async fn winner_not_among_players_is_rejected() {
        let app = TestStore::spawn().await;
        let record = fightcade_match().with_winner(Character::Morrigan);

        let err = app.store.create_or_update(record).await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::WinnerNotAPlayer)
        ));
        assert_eq!(app.match_count().await, 0);
    }

    #[tokio::test]
    async fn winner_code_off_the_roster_is_a_validation_error() {
        async fn save_with_winner_code(
            app: &TestStore,
            code: &str,
        ) -> Result<store::entity::match_info::Model, StoreError> {
            let record = fightcade_match().with_winner(code.parse()?);
            app.store.create_or_update(record).await
        }

        let app = TestStore::spawn().await;

        let err = save_with_winner_code(&app, "ZZ").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::UnknownCharacter(_))
        ));

        let stored = save_with_winner_code(&app, "VI").await.unwrap();
        assert_eq!(stored.winning_character, Some(Character::Victor));
    }

    #[tokio::test]
    async fn unset_winner_is_stored_as_null() {
        let app = TestStore::spawn().await;

        let stored = app.store.create_or_update(fightcade_match()).await.unwrap();

        assert_eq!(stored.winning_character, None);
    }
}

mod uniqueness {
    use super::*;

    #[tokio::test]
    async fn duplicate_url_and_timestamp_is_a_constraint_violation() {
        let app = TestStore::spawn().await;

        app.store
            .create_or_update(fightcade_match().with_timestamp(30))
            .await
            .unwrap();
        let err = app
            .store
            .create_or_update(fightcade_match().with_timestamp(30))
            .await
            .unwrap_err();

        assert!(err.is_constraint_violation(), "got {err:?}");
        assert_eq!(app.match_count().await, 1);
    }

    #[tokio::test]
    async fn same_url_at_another_timestamp_is_allowed() {
        let app = TestStore::spawn().await;

        app.store
            .create_or_update(fightcade_match().with_timestamp(0))
            .await
            .unwrap();
        app.store
            .create_or_update(fightcade_match().with_timestamp(95))
            .await
            .unwrap();

        assert_eq!(app.match_count().await, 2);
    }

    #[tokio::test]
    async fn update_onto_an_existing_key_is_a_constraint_violation() {
        let app = TestStore::spawn().await;

        app.store
            .create_or_update(fightcade_match().with_timestamp(10))
            .await
            .unwrap();
        let second = app
            .store
            .create_or_update(fightcade_match().with_timestamp(20))
            .await
            .unwrap();

        let mut moved = MatchInfo::from(second.clone());
        moved.video_timestamp = 10;
        let err = app.store.create_or_update(moved).await.unwrap_err();

        assert!(err.is_constraint_violation(), "got {err:?}");
        let unchanged = app.find_match(second.id).await.unwrap();
        assert_eq!(unchanged.video_timestamp, 20);
    }

    #[tokio::test]
    async fn concurrent_duplicates_yield_exactly_one_success() {
        let app = TestStore::spawn().await;

        let (a, b) = tokio::join!(
            app.store.create_or_update(fightcade_match()),
            app.store.create_or_update(fightcade_match()),
        );

        let results = [a, b];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let violations = results
            .iter()
            .filter(|r| matches!(r, Err(e) if e.is_constraint_violation()))
            .count();

        assert_eq!(successes, 1, "results: {results:?}");
        assert_eq!(violations, 1, "results: {results:?}");
        assert_eq!(app.match_count().await, 1);
    }
}

mod updates {
    use super::*;

    #[tokio::test]
    async fn saving_a_stored_record_updates_it_in_place() {
        let app = TestStore::spawn().await;
        let created = app.store.create_or_update(fightcade_match()).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let mut edit = MatchInfo::from(created.clone())
            .with_players("Bob", "Alice")
            .with_winner(Character::Victor);
        edit.video_timestamp = 42;
        let updated = app.store.create_or_update(edit).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.modified_at > created.modified_at);
        assert_eq!(updated.player1_name, "Bob");
        assert_eq!(updated.player2_name, "Alice");
        assert_eq!(updated.winning_character, Some(Character::Victor));
        assert_eq!(updated.video_timestamp, 42);
        assert_eq!(app.match_count().await, 1);
    }

    #[tokio::test]
    async fn invalid_update_leaves_the_stored_record_untouched() {
        let app = TestStore::spawn().await;
        let created = app.store.create_or_update(fightcade_match()).await.unwrap();

        let edit = MatchInfo::from(created.clone()).with_winner(Character::Zabel);
        let err = app.store.create_or_update(edit).await.unwrap_err();

        assert!(err.is_validation());
        let stored = app.find_match(created.id).await.unwrap();
        assert_eq!(stored, created);
    }
}

#[tokio::test]
async fn display_string_names_type_id_and_url() {
    let app = TestStore::spawn().await;
    let stored = app.store.create_or_update(fightcade_match()).await.unwrap();

    assert_eq!(
        stored.to_string(),
        format!("<MatchInfo> {} {}", stored.id, FIGHTCADE_URL)
    );
}
