use criterion::{criterion_group, criterion_main, Criterion};

use iagate::core::{
    has_named_permission, Authenticator, Capability, Config, CredentialStore, SessionManager,
};
use iagate::storage::MemoryStorage;

pub fn login(c: &mut Criterion) {
    let authenticator = Authenticator::new(CredentialStore::new(Config::default().users));
    let mut session = SessionManager::new(authenticator, MemoryStorage::new());

    c.bench_function("login", |b| {
        b.iter(|| {
            session.login("gabriela@demo.com", "Gaby").unwrap();
            session.logout();
        });
    });
}

pub fn has_permission(c: &mut Criterion) {
    c.bench_function("has_permission", |b| {
        b.iter(|| {
            for username in ["kenneth", "Joser", "BOLT", "demo"] {
                criterion::black_box(iagate::core::has_permission(
                    Some(username),
                    Capability::BulkMessaging,
                ));
                criterion::black_box(has_named_permission(Some(username), "unknown-capability"));
            }
        });
    });
}

criterion_group!(benches, login, has_permission);
criterion_main!(benches);
