use std::sync::Arc;
use std::thread;

use cclkit_core::DomainError;
use cclkit_record::{DataType, Field, Structure, record_factory};

#[test]
fn structure_loaded_from_json_backs_a_record() -> anyhow::Result<()> {
    let structure: Structure = serde_json::from_str(
        r#"{
            "fields": [
                { "name": "name", "data_type": "VC" },
                { "name": "id", "data_type": "F8" }
            ]
        }"#,
    )?;

    let record = record_factory::create(Some("name".to_string()), Some(Arc::new(structure)))?;

    assert_eq!(record.name(), "name");
    let layout: Vec<(&str, DataType)> = record
        .fields()
        .iter()
        .map(|f| (f.name(), f.data_type()))
        .collect();
    assert_eq!(layout, [("name", DataType::Vc), ("id", DataType::F8)]);
    Ok(())
}

#[test]
fn one_structure_serves_many_records_across_threads() -> anyhow::Result<()> {
    let structure = Arc::new(
        Structure::builder()
            .add("person_id", DataType::F8)
            .add("name_full", DataType::Vc)
            .add("birth_dt_tm", DataType::Dq8)
            .build()?,
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let structure = Arc::clone(&structure);
            thread::spawn(move || record_factory::create(Some(format!("rec_{i}")), Some(structure)))
        })
        .collect();

    for handle in handles {
        let record = handle.join().expect("thread panicked")?;
        assert!(Arc::ptr_eq(record.structure(), &structure));
        assert_eq!(
            record.structure().field("NAME_FULL"),
            Some(&Field::new("name_full", DataType::Vc)?)
        );
    }
    Ok(())
}

#[test]
fn factory_errors_surface_through_anyhow() {
    let result: anyhow::Result<_> =
        record_factory::create(Some("rec".to_string()), None).map_err(anyhow::Error::from);

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Structure must not be null");
    assert_eq!(
        err.downcast_ref::<DomainError>(),
        Some(&DomainError::null_reference("Structure must not be null"))
    );
}
