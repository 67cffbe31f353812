/// Integration tests for the licence model and the application layer
mod test_utilities;

use std::path::Path;
use test_utilities::mocks::*;
use spdx_licences::prelude::*;

const LICENCE_LIST: &str = r#"{
    "licenseListVersion": "3.25",
    "licenses": [
        {"licenseId": "MIT"},
        {"licenseId": "Apache-2.0"},
        {"licenseId": "GPL-2.0", "isDeprecatedLicenseId": true}
    ]
}"#;

fn lic(id: &str) -> AnyLicence {
    Licence::new(id, None).into()
}

#[test]
fn test_in_list_observes_every_answer() {
    let list = MockLicenceList::new().with_answers(&[true, false]);
    let licence = Licence::new("MIT", None);

    assert!(licence.in_list(&list));
    assert!(!licence.in_list(&list));
    assert_eq!(list.lookups(), 2);
}

#[test]
fn test_licence_equality_independent_of_meta() {
    let ids = ["MIT", "mit", "Apache-2.0", "LicenseRef-a", ""];
    for a in ids {
        for b in ids {
            let left = Licence::new(a, Some(Meta::line(1)));
            let right = Licence::new(b, Some(Meta::new(5, 9)));
            assert_eq!(left == right, a == b, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_reference_detection_is_case_insensitive() {
    for id in ["LicenseRef-foo", "MIT", "", "licenseref-", "DocumentRef-a:LicenseRef-b"] {
        assert_eq!(is_licence_ref(id), is_licence_ref(&id.to_uppercase()));
        assert_eq!(is_licence_ref(id), is_licence_ref(&id.to_lowercase()));
    }
}

#[test]
fn test_rendering_rules() {
    assert_eq!(ConjunctiveLicenceSet::default().licence_id(), "()");
    assert_eq!(DisjunctiveLicenceSet::default().licence_id(), "()");

    let members = || vec![lic("MIT"), lic("Apache-2.0")];
    assert_eq!(
        ConjunctiveLicenceSet::new(members()).licence_id(),
        "(MIT and Apache-2.0)"
    );
    assert_eq!(
        DisjunctiveLicenceSet::new(members()).licence_id(),
        "(MIT or Apache-2.0)"
    );

    let nested = DisjunctiveLicenceSet::new(vec![
        lic("MIT"),
        ConjunctiveLicenceSet::new(vec![lic("Apache-2.0"), lic("GPL-2.0")]).into(),
    ]);
    assert_eq!(nested.licence_id(), "(MIT or (Apache-2.0 and GPL-2.0))");
}

#[test]
fn test_set_meta_from_first_present_member() {
    let with_meta: AnyLicence = Licence::new("MIT", Some(Meta::new(7, 8))).into();
    let set = ConjunctiveLicenceSet::from_sparse(vec![None, None, Some(with_meta)]);
    assert_eq!(set.meta(), Some(&Meta::new(7, 8)));

    let all_absent = DisjunctiveLicenceSet::from_sparse(vec![None, None]);
    assert!(all_absent.meta().is_none());
}

#[test]
fn test_load_list_then_classify() {
    let reader = MockLicenceSourceReader::new()
        .with_licence_list(LICENCE_LIST)
        .with_expressions(
            r#"[
                {"type": "disjunctive", "members": [
                    {"type": "licence", "id": "MIT"},
                    {"type": "licence", "id": "LicenseRef-Custom"}
                ]},
                {"type": "conjunctive", "members": [
                    {"type": "licence", "id": "gpl-2.0"},
                    null,
                    {"type": "extracted", "id": "Vendor-EULA", "text": "..."}
                ]}
            ]"#,
        );

    let list = InMemoryLicenceList::new();
    LoadLicenceListUseCase::new(&reader, &list)
        .execute(Some(Path::new("licenses.json")), &[])
        .unwrap();
    assert_eq!(list.version().as_deref(), Some("3.25"));
    let expressions = LoadExpressionsUseCase::new(&reader)
        .execute(Path::new("expressions.json"))
        .unwrap();

    let report = ClassifyLicencesUseCase::new(&list).execute(ClassificationRequest::new(expressions));

    assert_eq!(report.expressions[0].expression, "(MIT or LicenseRef-Custom)");
    assert_eq!(report.expressions[1].expression, "(gpl-2.0 and Vendor-EULA)");

    let kinds: Vec<LicenceKind> = report
        .expressions
        .iter()
        .flat_map(|e| e.leaves.iter().map(|l| l.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            LicenceKind::Listed,
            LicenceKind::Reference,
            LicenceKind::Listed,
            LicenceKind::Unknown,
        ]
    );
    assert_eq!(report.expressions[1].leaves[1].source, LeafSource::Extracted);
    assert_eq!(report.unknown_ids(), vec!["Vendor-EULA"]);
}

#[test]
fn test_classification_sees_list_updates() {
    let list = std::sync::Arc::new(InMemoryLicenceList::from_ids(["MIT"]));
    let use_case = ClassifyLicencesUseCase::new(std::sync::Arc::clone(&list));

    let first = use_case.execute(ClassificationRequest::from_ids(["Internal-1.0"]));
    assert!(first.has_unknown());

    list.insert("Internal-1.0");
    let second = use_case.execute(ClassificationRequest::from_ids(["Internal-1.0"]));
    assert!(!second.has_unknown());

    list.replace_all(LicenceListRelease::new(Some("3.26".to_string()), ["Apache-2.0"]));
    let third = use_case.execute(ClassificationRequest::from_ids(["MIT", "Apache-2.0"]));
    assert_eq!(third.unknown_ids(), vec!["MIT"]);
}

#[test]
fn test_classification_while_new_releases_are_loaded() {
    let list = std::sync::Arc::new(InMemoryLicenceList::from_ids(["MIT", "Apache-2.0"]));
    let loader = {
        let list = std::sync::Arc::clone(&list);
        std::thread::spawn(move || {
            for i in 0..2_000 {
                let ids = ["MIT", "Apache-2.0", if i % 2 == 0 { "ISC" } else { "Zlib" }];
                list.replace_all(LicenceListRelease::new(Some(format!("3.{}", i)), ids));
            }
        })
    };

    let use_case = ClassifyLicencesUseCase::new(std::sync::Arc::clone(&list));
    while !loader.is_finished() {
        let report = use_case.execute(ClassificationRequest::from_ids(["MIT", "Apache-2.0"]));
        assert!(!report.has_unknown());
    }
    loader.join().unwrap();
}

#[test]
fn test_load_licence_list_failure_propagates() {
    let reader = MockLicenceSourceReader::new();
    let list = InMemoryLicenceList::from_ids(["MIT"]);
    let result = LoadLicenceListUseCase::new(&reader, &list).execute(Some(Path::new("licenses.json")), &[]);
    assert!(result.is_err());
    assert!(list.is_known("MIT"));
}

#[test]
fn test_formatters_render_report() {
    let list = MockLicenceList::new().with_licence("MIT");
    let report = ClassifyLicencesUseCase::new(list)
        .execute(ClassificationRequest::from_ids(["MIT", "Unknown-1.0"]));

    let json = FormatterFactory::create(OutputFormat::Json, None)
        .format(&report)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["listed"], 1);
    assert_eq!(value["summary"]["unknown"], 1);

    let markdown = FormatterFactory::create(OutputFormat::Markdown, None)
        .format(&report)
        .unwrap();
    assert!(markdown.contains("- `Unknown-1.0`"));
}
