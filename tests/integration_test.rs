use iagate::bulk::{BulkRequest, DeliveryStatus};
use iagate::lead::{LeadRequest, Plan};
use iagate::navigation::{Navigation, Route};
use iagate::{Capability, IagateError, Identity};

mod common;

#[test]
fn login_survives_restart() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();

        let mut app = common::app(root.path()).await;
        assert!(app.session().current_identity().is_none());

        let identity = app.session_mut().login("admin", "admin").unwrap();
        assert_eq!(
            identity,
            Identity {
                username: "admin".into(),
                email: "admin@test.com".into(),
            }
        );
        drop(app);

        // Simulate a reload.
        let mut app = common::app(root.path()).await;
        assert_eq!(app.session().current_identity(), Some(&identity));

        app.session_mut().logout();
        app.session_mut().logout();
        drop(app);

        let app = common::app(root.path()).await;
        assert!(app.session().current_identity().is_none());
    });
}

#[test]
fn failed_login_does_not_touch_persisted_session() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();

        let mut app = common::app(root.path()).await;
        app.session_mut().login("gabriela", "Gaby").unwrap();
        assert!(matches!(
            app.session_mut().login("gabriela", "gaby"),
            Err(IagateError::InvalidCredentials)
        ));
        drop(app);

        let app = common::app(root.path()).await;
        assert_eq!(
            app.session().current_identity().unwrap().username,
            "gabriela"
        );
    });
}

#[test]
fn route_guard_and_bulk_messaging() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();
        let mut app = common::app(root.path()).await;
        let request = BulkRequest::new("Promo", "+504 9999 0000\n+504 8888 0000");

        assert_eq!(app.navigate(Route::BulkMessage).route(), Route::Login);
        assert!(matches!(
            app.send_bulk(&request).await,
            Err(IagateError::PermissionDenied { .. })
        ));

        app.session_mut().login("joser@demo.com", "JoseR").unwrap();
        assert!(!app.session().has_permission(Capability::BulkMessaging));
        match app.navigate(Route::BulkMessage) {
            Navigation::Redirect { to, notice } => {
                assert_eq!(to, Route::Welcome);
                assert!(notice.is_some());
            }
            other => panic!("unexpected navigation {:?}", other),
        }
        assert!(app.send_bulk(&request).await.is_err());

        app.session_mut().login("Kenneth", "kenneth").unwrap();
        assert_eq!(
            app.navigate(Route::BulkMessage),
            Navigation::Render(Route::BulkMessage)
        );
        let log = app.send_bulk(&request).await.unwrap();
        assert_eq!(log.status, DeliveryStatus::Success);
        assert_eq!(log.recipients, 2);
    });
}

#[test]
fn campaign_log_survives_reload() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();
        let mut app = common::app(root.path()).await;

        assert!(matches!(app.bulk_logs(), Err(IagateError::Unauthenticated)));
        app.session_mut().login("demo", "demo").unwrap();
        assert!(matches!(
            app.bulk_logs(),
            Err(IagateError::PermissionDenied { .. })
        ));

        app.session_mut().login("bolt", "bolt").unwrap();
        let first = app
            .send_bulk(&BulkRequest::new("uno", "+504 1111"))
            .await
            .unwrap();
        let second = app
            .send_bulk(&BulkRequest::new("dos", "+504 1111\n+504 2222"))
            .await
            .unwrap();
        assert_eq!(app.bulk_logs().unwrap(), &[second.clone(), first.clone()][..]);

        let app = common::app(root.path()).await;
        assert_eq!(app.session().current_identity().unwrap().username, "bolt");
        assert_eq!(app.bulk_logs().unwrap(), &[second, first][..]);
    });
}

#[test]
fn anonymous_lead_submission() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();
        let app = common::app(root.path()).await;

        assert_eq!(
            app.navigate(Route::Pricing),
            Navigation::Render(Route::Pricing)
        );
        let request = LeadRequest::new("Ana", "ana@ia.com", "+504 3333").with_plan(Plan::Basic);
        let receipt = app.submit_lead(&request).await.unwrap();
        assert!(receipt.message.starts_with("Thanks"));

        let request = LeadRequest::new("Ana", "ana", "+504 3333");
        assert!(matches!(
            app.submit_lead(&request).await,
            Err(IagateError::InvalidRequest(_))
        ));
    });
}

#[test]
fn chat_history_is_per_user() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();
        let mut app = common::app(root.path()).await;

        assert!(matches!(
            app.chat_say("hola").await,
            Err(IagateError::Unauthenticated)
        ));

        app.session_mut().login("demo", "demo").unwrap();
        app.chat_say("hola").await.unwrap().unwrap();
        let messages = app.chat_say("adios").await.unwrap().unwrap();
        assert_eq!(messages.len(), 2);

        app.session_mut().login("bolt", "bolt").unwrap();
        assert!(app.chat_history().await.unwrap().is_none());

        app.session_mut().login("demo", "demo").unwrap();
        let messages = app.chat_history().await.unwrap().unwrap();
        assert_eq!(messages[0].content, "hola");
        assert_eq!(messages[1].content, "adios");

        app.chat_clear().await.unwrap().unwrap();
        assert_eq!(app.chat_history().await.unwrap(), Some(vec![]));
    });
}

#[test]
fn custom_users_replace_the_fixture() {
    tokio_test::block_on(async move {
        let root = common::temp_dir();
        let config_path = root.path().join("iagate.yaml");
        std::fs::write(
            &config_path,
            "auth:\n  users:\n    - { username: ana, email: ana@ia.com, password: s3cret }\n",
        )
        .unwrap();

        let mut initializer = iagate::config::Initializer::load_config_file(&config_path)
            .await
            .unwrap();
        initializer.set_root_dir(root.path());
        let mut app = initializer.build().await.unwrap();

        assert!(app.session_mut().login("admin", "admin").is_err());
        assert_eq!(
            app.session_mut().login("ANA@ia.com", "s3cret").unwrap().username,
            "ana"
        );
    });
}
