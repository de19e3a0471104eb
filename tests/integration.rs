//! End-to-end tests for graph-beta-models.
//!
//! These drive the public API the way a Graph client would: decode a
//! payload through a type's factory, inspect or edit it, encode it again.

use graph_beta_models::catalog::{self, ENUMS, HIERARCHIES, ModelKind};
use graph_beta_models::enum_codec::{GraphEnum, parse_enum_values, serialize_enum_values};
use graph_beta_models::error::Error;
use graph_beta_models::models::{
    AndroidDeviceOwnerGeneralDeviceConfiguration, AndroidKeyguardFeature, BaseItemKind,
    DeviceConfigurationKind, PagePromotionType, Site, SitePage, WindowsKioskAppConfigurationKind, WindowsKioskAppKind,
    WindowsKioskConfiguration, WindowsKioskMultipleApps, WindowsKioskProfile,
    WindowsKioskUserKind, WindowsKioskWin32App,
};
use graph_beta_models::serialization::{
    AdditionalDataHolder, from_json_str, from_json_value, to_json_string, to_json_value,
};
use serde_json::{Value, json};

fn kiosk_configuration() -> Value {
    json!({
        "@odata.type": "#microsoft.graph.windowsKioskConfiguration",
        "id": "b1f0c5de",
        "displayName": "Front desk",
        "version": 2,
        "kioskBrowserDefaultUrl": "https://intranet.contoso.com",
        "kioskBrowserRestartOnIdleTimeInMinutes": 30,
        "kioskProfiles": [{
            "profileId": "front-desk",
            "profileName": "Front desk",
            "appConfiguration": {
                "@odata.type": "#microsoft.graph.windowsKioskMultipleApps",
                "showTaskBar": false,
                "apps": [
                    {
                        "@odata.type": "#microsoft.graph.windowsKioskWin32App",
                        "name": "Notepad",
                        "autoLaunch": true,
                        "classicAppPath": "%windir%\\system32\\notepad.exe",
                    },
                    {
                        "@odata.type": "#microsoft.graph.windowsKioskUWPApp",
                        "name": "Calculator",
                        "appUserModelId": "Microsoft.WindowsCalculator_8wekyb3d8bbwe!App",
                        "startLayoutTileSize": "medium",
                    },
                ],
            },
            "userAccountsConfiguration": [
                {
                    "@odata.type": "#microsoft.graph.windowsKioskAzureADGroup",
                    "displayName": "Reception",
                    "groupId": "6d1b4e0f-4a3e-4b4c-9c7f-1f1f1f1f1f1f",
                },
            ],
        }],
        "windowsKioskForceUpdateSchedule": {
            "recurrence": "daily",
            "startDateTime": "2024-01-01T03:00:00Z",
        },
    })
}

#[test]
fn enum_values_round_trip_for_every_catalogued_enum() {
    for descriptor in ENUMS {
        for (ordinal, wire) in descriptor.values.iter().enumerate() {
            assert_eq!(
                descriptor.parse(wire).unwrap(),
                ordinal,
                "{}: {wire}",
                descriptor.name
            );
        }
        assert!(descriptor.parse("").is_err(), "{}", descriptor.name);
    }
}

#[test]
fn keyguard_camera_is_ordinal_one() {
    let camera = AndroidKeyguardFeature::parse("camera").unwrap();
    assert_eq!(camera, AndroidKeyguardFeature::Camera);
    assert_eq!(camera.ordinal(), 1);
    assert_eq!(camera.as_str(), "camera");

    match AndroidKeyguardFeature::parse("Camera") {
        Err(Error::UnrecognizedEnumValue { type_name, value }) => {
            assert_eq!(type_name, "androidKeyguardFeature");
            assert_eq!(value, "Camera");
        }
        other => panic!("expected unrecognized value, got {other:?}"),
    }
}

#[test]
fn enum_batches_keep_order_and_length() {
    let wire = ["face", "camera", "face"];
    let parsed: Vec<AndroidKeyguardFeature> = parse_enum_values(&wire).unwrap();
    assert_eq!(serialize_enum_values(&parsed), wire);

    let err = parse_enum_values::<AndroidKeyguardFeature, _>(&["camera", "nose"]).unwrap_err();
    assert!(err.to_string().contains("nose"));
}

#[test]
fn win32_app_stays_stamped_after_edits() {
    let mut app: WindowsKioskAppKind = from_json_str(
        r##"{"@odata.type": "#microsoft.graph.windowsKioskWin32App", "name": "Notepad", "autoLaunch": true}"##,
    )
    .unwrap();

    let WindowsKioskAppKind::Win32(win32) = &mut app else {
        panic!("expected a win32 app");
    };
    assert_eq!(win32.base().name(), Some("Notepad"));
    assert_eq!(win32.base().auto_launch(), Some(true));

    win32.base_mut().set_name(Some("Paint".to_string()));
    win32.base_mut().set_auto_launch(None);
    win32.set_edge_no_first_run(Some(true));

    assert_eq!(
        to_json_value(&app).unwrap(),
        json!({
            "@odata.type": "#microsoft.graph.windowsKioskWin32App",
            "name": "Paint",
            "edgeNoFirstRun": true,
        })
    );
}

#[test]
fn constructed_subtypes_carry_their_discriminator() {
    let app = WindowsKioskWin32App::new();
    assert_eq!(
        to_json_value(&app).unwrap(),
        json!({"@odata.type": "#microsoft.graph.windowsKioskWin32App"})
    );

    let config = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
    let decoded: DeviceConfigurationKind =
        from_json_value(&to_json_value(&config).unwrap()).unwrap();
    assert!(matches!(
        decoded,
        DeviceConfigurationKind::AndroidDeviceOwnerGeneral(_)
    ));
}

#[test]
fn undeclared_fields_survive_a_round_trip() {
    let input = json!({
        "@odata.type": "#microsoft.graph.windowsKioskWin32App",
        "name": "Notepad",
        "futureField": 42,
        "futureObject": {"nested": [1, 2, 3]},
    });
    let app: WindowsKioskAppKind = from_json_value(&input).unwrap();
    assert_eq!(app.additional_data().get("futureField"), Some(&json!(42)));
    assert_eq!(to_json_value(&app).unwrap(), input);
}

#[test]
fn unknown_or_missing_discriminator_falls_back_to_base() {
    let unknown = json!({
        "@odata.type": "#microsoft.graph.windowsKioskHologramApp",
        "name": "Hologram",
        "projector": "lobby",
    });
    let app: WindowsKioskAppKind = from_json_value(&unknown).unwrap();
    let WindowsKioskAppKind::Base(base) = &app else {
        panic!("expected base app, got {app:?}");
    };
    assert_eq!(base.name(), Some("Hologram"));
    assert_eq!(base.odata_type(), Some("#microsoft.graph.windowsKioskHologramApp"));
    assert_eq!(app.additional_data().get("projector"), Some(&json!("lobby")));
    assert_eq!(to_json_value(&app).unwrap(), unknown);

    let user: WindowsKioskUserKind = from_json_str(r#"{"userName": "guest"}"#).unwrap();
    assert!(matches!(user, WindowsKioskUserKind::Base(_)));
    assert_eq!(user.additional_data().get("userName"), Some(&json!("guest")));
}

#[test]
fn nested_kiosk_configuration_round_trip() {
    let input = kiosk_configuration();
    let config: DeviceConfigurationKind = from_json_value(&input).unwrap();

    let DeviceConfigurationKind::WindowsKiosk(kiosk) = &config else {
        panic!("expected kiosk configuration, got {config:?}");
    };
    assert_eq!(kiosk.base().display_name(), Some("Front desk"));

    let profile: &WindowsKioskProfile = &kiosk.kiosk_profiles().unwrap()[0];
    let Some(WindowsKioskAppConfigurationKind::MultipleApps(multi)) = profile.app_configuration()
    else {
        panic!("expected multiple apps");
    };
    let apps = multi.apps().unwrap();
    assert!(matches!(apps[0], WindowsKioskAppKind::Win32(_)));
    assert!(matches!(apps[1], WindowsKioskAppKind::Uwp(_)));
    assert!(matches!(
        profile.user_accounts_configuration().unwrap()[0],
        WindowsKioskUserKind::AzureAdGroup(_)
    ));

    assert_eq!(to_json_value(&config).unwrap(), input);
}

#[test]
fn built_configuration_decodes_back_to_the_same_value() {
    let mut multi = WindowsKioskMultipleApps::new();
    multi.set_show_task_bar(Some(true));
    multi.set_apps(Some(vec![WindowsKioskAppKind::Win32(WindowsKioskWin32App::new())]));

    let mut profile = WindowsKioskProfile::new();
    profile.set_profile_name(Some("Lobby".to_string()));
    profile.set_app_configuration(Some(WindowsKioskAppConfigurationKind::MultipleApps(multi)));
    profile.set_user_accounts_configuration(Some(Vec::new()));

    let mut config = WindowsKioskConfiguration::new();
    config.base_mut().set_display_name(Some("Lobby kiosk".to_string()));
    config.set_kiosk_profiles(Some(vec![profile]));

    let text = to_json_string(&config).unwrap();
    assert!(text.contains(r#""userAccountsConfiguration":[]"#));

    let back: WindowsKioskConfiguration = from_json_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn wrong_json_type_is_propagated() {
    let err = from_json_str::<WindowsKioskAppKind>(
        r##"{"@odata.type": "#microsoft.graph.windowsKioskWin32App", "autoLaunch": "yes"}"##,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "boolean",
            found: "string"
        }
    ));

    assert!(matches!(
        from_json_str::<WindowsKioskAppKind>("{not json"),
        Err(Error::Json(_))
    ));
}

#[test]
fn normalize_document_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kiosk.json");
    std::fs::write(&path, kiosk_configuration().to_string()).unwrap();

    let value = catalog::load_document(&path).unwrap();
    let doc = catalog::normalize(ModelKind::DeviceConfiguration, &value).unwrap();
    assert_eq!(
        doc.discriminator.as_deref(),
        Some("#microsoft.graph.windowsKioskConfiguration")
    );
    assert!(doc.additional_keys.is_empty());
    assert_eq!(doc.value, kiosk_configuration());
}

#[test]
fn missing_document_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = catalog::load_document(&path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn catalog_lists_every_hierarchy() {
    let names: Vec<&str> = HIERARCHIES.iter().map(|h| h.name).collect();
    for expected in [
        "androidDeviceOwnerGlobalProxy",
        "baseItem",
        "deviceConfiguration",
        "windowsKioskAppBase",
        "windowsKioskAppConfiguration",
        "windowsKioskUser",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    let err = catalog::find_enum("noSuchEnum").unwrap_err().to_string();
    assert!(err.contains("noSuchEnum"));
    assert!(err.contains("androidKeyguardFeature"));
}

#[test]
fn site_with_pages_round_trips_and_edits_stay_stamped() {
    let input = json!({
        "@odata.type": "#microsoft.graph.site",
        "id": "contoso.sharepoint.com,2C712604,9C4E2A68",
        "displayName": "Marketing",
        "webUrl": "https://contoso.sharepoint.com/sites/marketing",
        "sharepointIds": {"siteId": "2C712604", "webId": "9C4E2A68"},
        "pages": [
            {"@odata.type": "#microsoft.graph.sitePage", "title": "Launch", "promotionKind": "newsPost"},
            {"@odata.type": null, "title": "About"},
        ],
        "lists": [{"id": "1"}],
    });
    let item: BaseItemKind = from_json_value(&input).unwrap();
    let BaseItemKind::Site(site) = &item else {
        panic!("expected site, got {item:?}");
    };
    let pages = site.pages().unwrap();
    assert_eq!(pages[0].promotion_kind(), Some(PagePromotionType::NewsPost));
    assert_eq!(pages[1].base().base().odata_type(), Some(SitePage::ODATA_TYPE));
    assert_eq!(item.additional_data().get("lists"), Some(&json!([{"id": "1"}])));

    let mut edited: Site = site.clone();
    let mut page = SitePage::new();
    page.set_title(Some("Roadmap".to_string()));
    edited.set_pages(Some(vec![page]));
    let out = to_json_value(&edited).unwrap();
    assert_eq!(out["@odata.type"], json!("#microsoft.graph.site"));
    assert_eq!(
        out["pages"],
        json!([{"@odata.type": "#microsoft.graph.sitePage", "title": "Roadmap"}])
    );
    assert_eq!(out["lists"], json!([{"id": "1"}]));
}
