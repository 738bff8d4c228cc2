use std::path::Path;

use tempfile::TempDir;

pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("iagate-test")
        .tempdir()
        .unwrap()
}

pub async fn app(root: &Path) -> iagate::App {
    let mut config = iagate::config::Config::default();
    config.bulk.set_delay_milliseconds(Some(0));
    config.bulk.set_success_ratio(Some(1.0));
    config.lead.set_delay_milliseconds(Some(0));

    let mut initializer = iagate::config::Initializer::from_config(config);
    initializer.set_root_dir(root);
    initializer.init_dir().await.unwrap();
    initializer.build().await.unwrap()
}
