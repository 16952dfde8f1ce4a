mod common;

use common::*;
use std::fs;
use std::num::NonZeroUsize;

use guest_unifier::infrastructure::persistence::{
    read_domain_list, read_enrichment_dir, write_domain_list, write_split_files,
};
use guest_unifier::utils::domain_list::{
    SplitStrategy, clean_domains, extract_domains, split_domains,
};

#[test]
fn test_extract_from_enrichment_dir() {
    let data = DataDir::new();
    data.write_enrichment_batch(
        1,
        vec![
            enrichment_json("alice", "Example.com"),
            enrichment_with_company_json("bob", "Acme", Some("acme.com"), Some("www.acme.com")),
        ],
    );
    data.write_enrichment_batch(2, vec![enrichment_json("carol", "example.com")]);

    let batches = read_enrichment_dir(&data.enrichment_dir()).unwrap();
    let report = extract_domains(&batches);

    let domains: Vec<&str> = report.domains.iter().map(|d| d.as_str()).collect();
    assert_eq!(domains, vec!["acme.com", "example.com"]);
}

#[test]
fn test_clean_round_trip_through_files() {
    let data = DataDir::new();
    let list = data.path().join("unique_domains.txt");
    fs::write(
        &list,
        "https://b.com/?ref=x\n\na.com\nA.com\nnot-a-domain\n  c.io  \n",
    )
    .unwrap();

    let lines = read_domain_list(&list).unwrap();
    assert_eq!(lines.len(), 5);

    let report = clean_domains(lines.iter().map(String::as_str));
    let written = write_domain_list(&list, &report.domains).unwrap();

    assert_eq!(written, 3);
    assert_eq!(fs::read_to_string(&list).unwrap(), "a.com\nb.com\nc.io\n");
    assert_eq!(report.invalid, vec!["not-a-domain".to_string()]);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.query_stripped.len(), 1);
}

#[test]
fn test_split_writes_every_part() {
    let data = DataDir::new();
    let domains: Vec<String> = ["a.com", "b.com", "c.com"]
        .iter()
        .map(|d| d.to_string())
        .collect();
    let out = data.path().join("domain_batches");

    let parts = split_domains(&domains, NonZeroUsize::new(4).unwrap(), SplitStrategy::Chunked);
    let files = write_split_files(&out, &parts).unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|(path, _)| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["domains_01.txt", "domains_02.txt", "domains_03.txt", "domains_04.txt"]
    );
    let counts: Vec<usize> = files.iter().map(|(_, count)| *count).collect();
    assert_eq!(counts, vec![1, 1, 1, 0]);
    assert_eq!(fs::read_to_string(out.join("domains_04.txt")).unwrap(), "");
}

#[test]
fn test_split_chunked_keeps_sorted_ranges() {
    let domains: Vec<String> = (0..25).map(|i| format!("d{:02}.com", i)).collect();

    let parts = split_domains(&domains, NonZeroUsize::new(10).unwrap(), SplitStrategy::Chunked);

    assert_eq!(parts.len(), 10);
    assert_eq!(parts[0], vec!["d00.com", "d01.com", "d02.com"]);
    assert_eq!(parts.iter().map(Vec::len).sum::<usize>(), 25);
    // ceil(25 / 10) = 3 per file, so the tenth file gets nothing
    assert_eq!(parts[8], vec!["d24.com"]);
    assert!(parts[9].is_empty());
}
