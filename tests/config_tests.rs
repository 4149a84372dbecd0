use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use switch_frame::config::Configuration;
use tempfile::tempdir;

#[test]
fn minimal_config_uses_deployment_defaults() {
    let yaml = r#"
photo-library-path: "/photos"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.photo_library_path, PathBuf::from("/photos"));
    assert_eq!(cfg.fixed_image_name, "who knows_1");
    assert_eq!(cfg.canvas.width, 1024);
    assert_eq!(cfg.canvas.height, 600);
    assert_eq!(cfg.poll_interval, Duration::from_millis(200));
    assert_eq!(cfg.slide_interval, Duration::from_secs(10));
    assert_eq!(cfg.switch_pin, 17);
    assert_eq!(cfg.shutdown_pin, 27);
    assert_eq!(cfg.shutdown_command, "sudo shutdown -h now");
}

#[test]
fn parse_full_config_with_humantime_durations() {
    let yaml = r#"
photo-library-path: "/photos"
fixed-image-name: banner
canvas:
  width: 800
  height: 480
poll-interval: 250ms
slide-interval: 15s
switch-pin: 5
shutdown-pin: 6
shutdown-command: "systemctl poweroff"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.fixed_image_name, "banner");
    assert_eq!((cfg.canvas.width, cfg.canvas.height), (800, 480));
    assert_eq!(cfg.poll_interval, Duration::from_millis(250));
    assert_eq!(cfg.slide_interval, Duration::from_secs(15));
    assert_eq!((cfg.switch_pin, cfg.shutdown_pin), (5, 6));
    assert_eq!(cfg.shutdown_command, "systemctl poweroff");
}

#[test]
fn partial_canvas_keeps_the_other_default() {
    let yaml = r#"
photo-library-path: "/photos"
canvas:
  width: 1920
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.canvas.width, 1920);
    assert_eq!(cfg.canvas.height, 600);
}

#[test]
fn from_yaml_file_round_trip() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "photo-library-path: /mnt/facts\nslide-interval: 30s\n").unwrap();

    let cfg = Configuration::from_yaml_file(&path).unwrap();

    assert_eq!(cfg.photo_library_path, PathBuf::from("/mnt/facts"));
    assert_eq!(cfg.slide_interval, Duration::from_secs(30));
}

#[test]
fn validation_rejects_zero_canvas() {
    let yaml = r#"
photo-library-path: "/photos"
canvas:
  width: 0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn validation_rejects_identical_pins() {
    let yaml = r#"
photo-library-path: "/photos"
switch-pin: 17
shutdown-pin: 17
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn validation_rejects_zero_poll_interval() {
    let yaml = r#"
photo-library-path: "/photos"
poll-interval: 0s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn validation_accepts_the_defaults() {
    let yaml = r#"
photo-library-path: "/photos"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_ok());
}
