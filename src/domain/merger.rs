//! Builds one unified record from a guest and whatever joined to it.

use crate::domain::entities::{
    CompanySection, CompletenessFlags, ContactSection, DirectorySection, EnrichmentEnvelope,
    HeadquartersSection, IdentityRecord, IntelligenceEnvelope, IntelligenceSection,
    PositionSection, ProfileSection, UnifiedRecord,
};

/// Merges a guest with its optional enrichment and intelligence records.
///
/// Never fails. A missing source leaves its sections empty, not absent.
/// Completeness flags are derived from the extracted leaf values only:
///
/// - `has_profile_link` - the guest supplied a non-empty profile link
/// - `has_enrichment` - an enrichment record was supplied
/// - `has_intelligence` - an intelligence record was supplied
/// - `has_email` - the contact section has a non-empty probable email
/// - `has_company` - the company section has a non-empty name
///
/// `resolved_domain` is left unset; the engine fills it in when it builds the
/// final record.
pub fn merge_record(
    identity: &IdentityRecord,
    enrichment: Option<&EnrichmentEnvelope>,
    intelligence: Option<&IntelligenceEnvelope>,
) -> UnifiedRecord {
    let directory = DirectorySection {
        url: identity.url.clone(),
        name: identity.name.clone(),
        avatar: identity.avatar.clone(),
        metadata: identity.metadata.clone(),
    };

    let mut profile = ProfileSection {
        link: identity.profile_link.clone(),
        ..ProfileSection::default()
    };
    let mut contact = ContactSection::default();
    let mut position = PositionSection::default();
    let mut company = CompanySection::default();

    if let Some(enrichment) = enrichment {
        profile = merge_profile(profile, enrichment);
        contact = contact_section(enrichment);
        position = position_section(enrichment);
        company = company_section(enrichment);
    }

    let intelligence = intelligence
        .map(intelligence_section)
        .unwrap_or_default();

    let data_completeness = CompletenessFlags {
        has_profile_link: is_present(&profile.link),
        has_enrichment: enrichment.is_some(),
        has_intelligence: intelligence.enriched,
        has_email: is_present(&contact.email),
        has_company: is_present(&company.name),
    };

    UnifiedRecord {
        username: identity.username.clone(),
        directory,
        profile,
        contact,
        position,
        company,
        intelligence,
        resolved_domain: None,
        data_completeness,
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn merge_profile(base: ProfileSection, enrichment: &EnrichmentEnvelope) -> ProfileSection {
    let source = &enrichment.contact.profile;

    ProfileSection {
        link: base.link,
        profile_id: source.linkedin_id.clone(),
        profile_url: source.linkedin_url.clone(),
        handle: source.linkedin_handle.clone(),
        firstname: source.firstname.clone(),
        lastname: source.lastname.clone(),
        location: source.location.clone(),
        headline: source.headline.clone(),
        summary: source.summary.clone(),
        premium_account: source.premium_account,
    }
}

fn contact_section(enrichment: &EnrichmentEnvelope) -> ContactSection {
    let source = &enrichment.contact;

    ContactSection {
        email: source.most_probable_email.clone(),
        email_status: source.most_probable_email_status.clone(),
        domain: source.domain.clone(),
        all_emails: source.emails.clone(),
        phones: source.phones.clone(),
        social_medias: source.social_medias.clone(),
    }
}

fn position_section(enrichment: &EnrichmentEnvelope) -> PositionSection {
    let source = &enrichment.contact.profile.position;

    PositionSection {
        title: source.title.clone(),
        description: source.description.clone(),
        start_date: source.start_at.clone(),
        end_date: source.end_at.clone(),
    }
}

fn company_section(enrichment: &EnrichmentEnvelope) -> CompanySection {
    let source = enrichment.company();
    let hq = &source.headquarters;

    CompanySection {
        name: source.name.clone(),
        domain: source.domain.clone(),
        website: source.website.clone(),
        linkedin_url: source.linkedin_url.clone(),
        linkedin_id: source.linkedin_id.clone(),
        industry: source.industry.clone(),
        description: source.description.clone(),
        headcount: source.headcount.clone(),
        headcount_range: source.headcount_range.clone(),
        year_founded: source.year_founded.clone(),
        headquarters: Some(HeadquartersSection {
            city: hq.city.clone(),
            region: hq.region.clone(),
            country: hq.country.clone(),
            country_code: hq.country_code.clone(),
            address: hq.address_line_1.clone(),
        }),
    }
}

fn intelligence_section(source: &IntelligenceEnvelope) -> IntelligenceSection {
    let gtm = &source.gtm_intelligence;

    IntelligenceSection {
        enriched: true,
        analyzed_at: source.analyzed_at.clone(),
        source_url: source.url.clone(),
        company_name: source.company_name.clone(),
        tldr: gtm.tldr.clone(),
        context_tags: gtm.context_tags.clone(),
        business_model: gtm.business_model.clone(),
        company_profile: gtm.company_profile.clone(),
        products_services: gtm.products_services.clone(),
        technology_profile: gtm.technology_profile.clone(),
        market_evidence: gtm.market_evidence.clone(),
        contact_information: gtm.contact_information.clone(),
        company_intelligence: gtm.company_intelligence.clone(),
        recognition_credibility: gtm.recognition_credibility.clone(),
        intelligence_gaps: gtm.intelligence_gaps.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enrichment(value: serde_json::Value) -> EnrichmentEnvelope {
        serde_json::from_value(value).unwrap()
    }

    fn intelligence(value: serde_json::Value) -> IntelligenceEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_identity_only() {
        let record = merge_record(&IdentityRecord::new("bob"), None, None);

        assert_eq!(record.username, "bob");
        assert_eq!(record.profile, ProfileSection::default());
        assert_eq!(record.contact, ContactSection::default());
        assert_eq!(record.position, PositionSection::default());
        assert_eq!(record.company, CompanySection::default());
        assert_eq!(record.intelligence, IntelligenceSection::default());
        assert_eq!(record.data_completeness, CompletenessFlags::default());
    }

    #[test]
    fn test_directory_fields_copied() {
        let identity: IdentityRecord = serde_json::from_value(json!({
            "username": "alice",
            "url": "https://directory.example/alice",
            "name": "Alice",
            "avatar": "https://cdn.example/a.png",
            "linkedIn": "https://linkedin.com/in/alice",
            "metadata": { "role": "hacker" }
        }))
        .unwrap();

        let record = merge_record(&identity, None, None);

        assert_eq!(record.directory.name.as_deref(), Some("Alice"));
        assert_eq!(record.directory.metadata["role"], "hacker");
        assert_eq!(
            record.profile.link.as_deref(),
            Some("https://linkedin.com/in/alice")
        );
        assert!(record.data_completeness.has_profile_link);
        assert!(!record.data_completeness.has_enrichment);
    }

    #[test]
    fn test_empty_profile_link_is_not_a_link() {
        let identity: IdentityRecord =
            serde_json::from_value(json!({ "username": "eve", "linkedIn": "" })).unwrap();

        let record = merge_record(&identity, None, None);

        assert!(!record.data_completeness.has_profile_link);
    }

    #[test]
    fn test_enrichment_sections_filled() {
        let source = enrichment(json!({
            "custom": { "username": "alice" },
            "contact": {
                "most_probable_email": "alice@acme.io",
                "most_probable_email_status": "DELIVERABLE",
                "domain": "acme.io",
                "emails": [{ "email": "alice@acme.io" }],
                "profile": {
                    "firstname": "Alice",
                    "headline": "Builder",
                    "position": {
                        "title": "CTO",
                        "company": {
                            "name": "Acme",
                            "headquarters": { "city": "Berlin", "address_line_1": "Main St 1" }
                        }
                    }
                }
            }
        }));

        let record = merge_record(&IdentityRecord::new("alice"), Some(&source), None);

        assert_eq!(record.contact.email.as_deref(), Some("alice@acme.io"));
        assert_eq!(record.contact.all_emails.len(), 1);
        assert_eq!(record.profile.firstname.as_deref(), Some("Alice"));
        assert_eq!(record.position.title.as_deref(), Some("CTO"));
        assert_eq!(record.company.name.as_deref(), Some("Acme"));
        assert_eq!(
            record.company.headquarters.unwrap().address.as_deref(),
            Some("Main St 1")
        );

        let flags = record.data_completeness;
        assert!(flags.has_enrichment);
        assert!(flags.has_email);
        assert!(flags.has_company);
        assert!(!flags.has_intelligence);
        assert!(!flags.has_profile_link);
    }

    #[test]
    fn test_enrichment_without_leaves_sets_only_enrichment_flag() {
        let source = enrichment(json!({
            "custom": { "username": "alice" },
            "contact": { "most_probable_email": "", "profile": { "position": { "company": { "name": "" } } } }
        }));

        let flags = merge_record(&IdentityRecord::new("alice"), Some(&source), None).data_completeness;

        assert!(flags.has_enrichment);
        assert!(!flags.has_email);
        assert!(!flags.has_company);
    }

    #[test]
    fn test_email_flag_ignores_other_emails() {
        let source = enrichment(json!({
            "custom": { "username": "alice" },
            "contact": { "emails": [{ "email": "alice@acme.io" }] }
        }));

        let record = merge_record(&IdentityRecord::new("alice"), Some(&source), None);

        assert!(!record.data_completeness.has_email);
        assert!(record.contact.email.is_none());
    }

    #[test]
    fn test_intelligence_section_filled() {
        let source = intelligence(json!({
            "status": "completed",
            "url": "https://www.example.com/",
            "company_name": "Example",
            "analyzed_at": "2025-01-01T00:00:00Z",
            "gtm_intelligence": {
                "tldr": "Examples as a service",
                "context_tags": ["saas"],
                "technology_profile": { "stack": ["rust"] }
            }
        }));

        let record = merge_record(&IdentityRecord::new("alice"), None, Some(&source));

        assert!(record.intelligence.enriched);
        assert!(record.data_completeness.has_intelligence);
        assert!(!record.data_completeness.has_enrichment);
        assert_eq!(
            record.intelligence.source_url.as_deref(),
            Some("https://www.example.com/")
        );
        assert_eq!(
            record.intelligence.tldr.as_deref(),
            Some("Examples as a service")
        );
        assert_eq!(record.intelligence.technology_profile["stack"][0], "rust");
    }
}
