use small_catalog::{Catalog, CatalogError, CollectionStatus, Record, SearchHit, SortCriterion, CAPACITY};

fn seeded() -> Catalog {
    let mut catalog = Catalog::new();
    assert_eq!(catalog.seed_fixed_example(), 4);
    catalog
}

fn names(catalog: &Catalog) -> Vec<&str> {
    catalog.snapshot().iter().map(Record::name).collect()
}

/// Deterministic mixed-up records, with duplicate keys, without pulling in a
/// random source.
fn scrambled(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let key = (i * 13 + 5) % 17;
            Record::new(
                format!("Comp{:02}", key),
                format!("Tipo{}", key % 5),
                (key % 10) as i32 + 1,
            )
        })
        .collect()
}

fn catalog_with(records: &[Record]) -> Catalog {
    let mut catalog = Catalog::new();
    for record in records {
        catalog.insert_record(record.clone()).unwrap();
    }
    catalog
}

#[test]
fn test_example_sorted_by_name_then_searched() {
    let mut catalog = seeded();

    let report = catalog.sort(SortCriterion::ByName);
    assert_eq!(report.comparisons(), 6);
    assert_eq!(names(&catalog), vec!["Chip", "Motor", "Painel", "Sensor"]);

    match catalog.search("Sensor").unwrap() {
        SearchHit::Found { record, index, .. } => {
            assert_eq!(index, 3);
            assert_eq!(record, Record::new("Sensor", "Controle", 5));
        }
        other => panic!("expected Sensor to be found, got {:?}", other),
    }

    let miss = catalog.search("Nada").unwrap();
    assert!(matches!(miss, SearchHit::NotFound { comparisons } if comparisons > 0));
}

#[test]
fn test_search_on_unsorted_example_is_refused() {
    let catalog = seeded();
    let err = catalog.search("Motor").unwrap_err();
    assert!(matches!(err, CatalogError::PreconditionViolation));
}

#[test]
fn test_twenty_inserts_then_capacity_exceeded() {
    let mut catalog = Catalog::new();
    for i in 0..CAPACITY {
        catalog.insert(&format!("Comp{}", i), "Tipo", 1).unwrap();
        assert_eq!(catalog.len(), i + 1);
    }

    let err = catalog.insert("Extra", "Tipo", 1).unwrap_err();
    assert!(matches!(err, CatalogError::CapacityExceeded { .. }));
    assert_eq!(catalog.len(), 20);
    assert!(!names(&catalog).contains(&"Extra"));
}

#[test]
fn test_every_sort_orders_by_its_key() {
    for n in [0, 1, 2, 5, 17, 20] {
        let records = scrambled(n);
        let triangular = (n * n.saturating_sub(1) / 2) as u64;

        let mut catalog = catalog_with(&records);
        let report = catalog.sort(SortCriterion::ByName);
        assert_eq!(report.comparisons(), triangular);
        assert!(catalog.snapshot().windows(2).all(|w| w[0].name() <= w[1].name()));

        let mut catalog = catalog_with(&records);
        let report = catalog.sort(SortCriterion::ByType);
        assert!(report.comparisons() <= triangular);
        assert!(report.comparisons() >= n.saturating_sub(1) as u64);
        assert!(catalog.snapshot().windows(2).all(|w| w[0].kind() <= w[1].kind()));

        let mut catalog = catalog_with(&records);
        let report = catalog.sort(SortCriterion::ByPriority);
        assert_eq!(report.comparisons(), triangular);
        assert!(catalog
            .snapshot()
            .windows(2)
            .all(|w| w[0].priority() <= w[1].priority()));
    }
}

#[test]
fn test_sorts_keep_the_same_records() {
    let records = scrambled(20);
    let mut expected: Vec<String> = records.iter().map(|r| format!("{:?}", r)).collect();
    expected.sort();

    for criterion in SortCriterion::ALL {
        let mut catalog = catalog_with(&records);
        catalog.sort(criterion);
        let mut actual: Vec<String> = catalog.snapshot().iter().map(|r| format!("{:?}", r)).collect();
        actual.sort();
        assert_eq!(actual, expected, "{} sort lost or duplicated records", criterion);
    }
}

#[test]
fn test_insert_sort_search_round_trip() {
    let records = vec![
        Record::new("Valvula", "Hidraulica", 4),
        Record::new("Bomba", "Hidraulica", 6),
        Record::new("Antena", "Comunicacao", 2),
        Record::new("Radar", "Sensoriamento", 9),
        Record::new("Bateria", "Energia", 1),
    ];
    let mut catalog = catalog_with(&records);
    catalog.sort(SortCriterion::ByName);

    for record in &records {
        let hit = catalog.search(record.name()).unwrap();
        assert_eq!(hit.record(), Some(record));
    }
}

#[test]
fn test_status_transitions() {
    let mut catalog = seeded();
    assert_eq!(catalog.status(), CollectionStatus::Unsorted);

    catalog.sort(SortCriterion::ByName);
    assert_eq!(catalog.status(), CollectionStatus::SortedByName);
    catalog.search("Chip").unwrap();
    assert_eq!(catalog.status(), CollectionStatus::SortedByName);

    catalog.sort(SortCriterion::ByType);
    assert_eq!(catalog.status(), CollectionStatus::Unsorted);
    assert!(catalog.search("Chip").is_err());

    catalog.sort(SortCriterion::ByName);
    catalog.insert("Cabo", "Conexao", 7).unwrap();
    assert_eq!(catalog.status(), CollectionStatus::Unsorted);

    catalog.sort(SortCriterion::ByName);
    catalog.sort(SortCriterion::ByPriority);
    assert_eq!(catalog.status(), CollectionStatus::Unsorted);
}

#[test]
fn test_priority_sort_with_duplicates() {
    let mut catalog = Catalog::new();
    catalog.insert("A", "t", 3).unwrap();
    catalog.insert("B", "t", 3).unwrap();
    catalog.insert("C", "t", 1).unwrap();

    catalog.sort(SortCriterion::ByPriority);
    let priorities: Vec<i32> = catalog.snapshot().iter().map(Record::priority).collect();
    assert_eq!(priorities, vec![1, 3, 3]);
    // selection sort swapped A behind B
    assert_eq!(names(&catalog), vec!["C", "B", "A"]);
}

#[test]
fn test_round_trip_with_names_past_the_length_limit() {
    let long_ascii = "ControladorDeVooPrincipalXYZ_extra";
    // 28 ASCII bytes then "ç": the cut lands inside the two-byte char
    let split_multibyte = format!("{}ção", "a".repeat(28));
    let accented = "Válvula de Alívio Hidráulica Secundária";

    let mut catalog = seeded();
    catalog.insert(long_ascii, "Controle", 4).unwrap();
    catalog.insert(&split_multibyte, "Estrutura", 6).unwrap();
    catalog.insert(accented, "Hidraulica", 8).unwrap();
    catalog.sort(SortCriterion::ByName);

    for name in [long_ascii, split_multibyte.as_str(), accented] {
        let hit = catalog.search(name).unwrap();
        let record = hit
            .record()
            .unwrap_or_else(|| panic!("'{}' should be found after sorting", name));
        assert!(record.name().len() <= 29);
        assert!(name.starts_with(record.name()));
    }

    let hit = catalog.search(&split_multibyte).unwrap();
    assert_eq!(hit.record().unwrap().name(), "a".repeat(28));
}
