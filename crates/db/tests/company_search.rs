//! Integration tests for company search and the grouped-by-type tree.

use bauorder_core::company::CompanyRole;
use bauorder_db::models::company::{CreateCompany, UpdateCompany};
use bauorder_db::repositories::CompanyRepo;
use sqlx::PgPool;

fn new_company(name: &str, company_type: CompanyRole) -> CreateCompany {
    CreateCompany {
        name: name.to_string(),
        company_type,
        address: None,
        phone: None,
        email: None,
    }
}

// ---------------------------------------------------------------------------
// Test: substring search scoped by tenant (property 5)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_scopes_by_tenant_and_substring(pool: PgPool) {
    CompanyRepo::create(&pool, "t1", &new_company("Mason Bros", CompanyRole::Masonry))
        .await
        .unwrap();
    CompanyRepo::create(&pool, "t1", &new_company("ACME", CompanyRole::Client))
        .await
        .unwrap();
    CompanyRepo::create(&pool, "t2", &new_company("Masonic Co", CompanyRole::Masonry))
        .await
        .unwrap();

    let hits = CompanyRepo::search_by_name(&pool, "t1", None, "mas")
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Mason Bros");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_optionally_scopes_by_type(pool: PgPool) {
    CompanyRepo::create(&pool, "t1", &new_company("Mauer AG", CompanyRole::Masonry))
        .await
        .unwrap();
    CompanyRepo::create(&pool, "t1", &new_company("Mauer Planung", CompanyRole::Architect))
        .await
        .unwrap();

    let hits = CompanyRepo::search_by_name(&pool, "t1", Some(CompanyRole::Masonry), "mauer")
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].company_type, "masonry");

    let all = CompanyRepo::search_by_name(&pool, "t1", None, "mauer")
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: grouped tree (property 4)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tree_groups_each_company_exactly_once(pool: PgPool) {
    CompanyRepo::create(&pool, "t1", &new_company("M1", CompanyRole::Masonry))
        .await
        .unwrap();
    CompanyRepo::create(&pool, "t1", &new_company("M2", CompanyRole::Masonry))
        .await
        .unwrap();
    CompanyRepo::create(&pool, "t1", &new_company("A1", CompanyRole::Architect))
        .await
        .unwrap();
    CompanyRepo::create(&pool, "t2", &new_company("Other", CompanyRole::Client))
        .await
        .unwrap();

    let tree = CompanyRepo::tree(&pool, "t1").await.unwrap();

    // Types with zero companies are absent, not empty.
    assert_eq!(tree.len(), 2);
    assert_eq!(tree["masonry"].len(), 2);
    assert_eq!(tree["architect"].len(), 1);
    assert!(!tree.contains_key("engineer"));
    assert!(!tree.contains_key("client"));

    // Flattened, the tree is exactly the tenant's companies, each once.
    let flattened: usize = tree.values().map(|v| v.len()).sum();
    let listed = CompanyRepo::list_by_tenant(&pool, "t1").await.unwrap();
    assert_eq!(flattened, listed.len());
}

// ---------------------------------------------------------------------------
// Test: update patches only given fields, type immutable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_patches_contact_fields(pool: PgPool) {
    let company = CompanyRepo::create(&pool, "t1", &new_company("Mason Bros", CompanyRole::Masonry))
        .await
        .unwrap();

    let updated = CompanyRepo::update(
        &pool,
        "t1",
        company.id,
        &UpdateCompany {
            name: None,
            address: Some("Baustr. 1".to_string()),
            phone: Some("555-2000".to_string()),
            email: None,
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.name, "Mason Bros");
    assert_eq!(updated.address.as_deref(), Some("Baustr. 1"));
    assert_eq!(updated.phone.as_deref(), Some("555-2000"));
    assert_eq!(updated.company_type, "masonry");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_wrong_tenant_returns_none(pool: PgPool) {
    let company = CompanyRepo::create(&pool, "t1", &new_company("Mason Bros", CompanyRole::Masonry))
        .await
        .unwrap();

    let result = CompanyRepo::update(
        &pool,
        "t2",
        company.id,
        &UpdateCompany {
            name: Some("Stolen".to_string()),
            address: None,
            phone: None,
            email: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}
