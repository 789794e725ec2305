use sheet_layout::*;

#[test]
fn test_default_config_is_valid() {
    assert!(LayoutConfig::default().validate().is_ok());
    assert!(LayoutConfig::for_page(PageSize::A4).validate().is_ok());
}

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::Letter.dimensions(), (816.0, 1056.0));
    assert_eq!(PageSize::Legal.dimensions(), (816.0, 1344.0));
    assert_eq!(PageSize::A4.dimensions(), (794.0, 1123.0));
    assert_eq!(
        PageSize::Custom {
            width: 500.0,
            height: 700.0
        }
        .dimensions(),
        (500.0, 700.0)
    );
}

#[test]
fn test_validation_margin_too_large() {
    let config = LayoutConfig {
        margin: 410.0,
        ..Default::default()
    };
    match config.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("no usable area")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_values() {
    let negative_spacing = LayoutConfig {
        spacing: -1.0,
        ..Default::default()
    };
    assert!(negative_spacing.validate().is_err());

    let zero_page = LayoutConfig {
        page_height: 0.0,
        ..Default::default()
    };
    assert!(zero_page.validate().is_err());

    let inverted = LayoutConfig {
        min_size: Size::new(500.0, 100.0),
        ..Default::default()
    };
    assert!(inverted.validate().is_err());

    let zero_min = LayoutConfig {
        min_size: Size::new(0.0, 100.0),
        ..Default::default()
    };
    assert!(zero_min.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_config() {
    use tempfile::NamedTempFile;

    let config = LayoutConfig {
        margin: 24.0,
        spacing: 12.0,
        ..LayoutConfig::for_page(PageSize::A4)
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    config.save(path).await.unwrap();
    let loaded = LayoutConfig::load(path).await.unwrap();

    assert_eq!(loaded, config);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "spacing": 16.0 }"#)
        .await
        .unwrap();

    let loaded = LayoutConfig::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.spacing, 16.0);
    assert_eq!(loaded.page_width, LayoutConfig::default().page_width);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_config_fails() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "margin": -5.0 }"#)
        .await
        .unwrap();

    assert!(matches!(
        LayoutConfig::load(temp_file.path()).await,
        Err(LayoutError::Config(_))
    ));
}
