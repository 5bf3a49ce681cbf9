//! MongoDB integration tests for the offer repository.
//!
//! Require Docker: `cargo test -p domain_offers -- --ignored`

use domain_offers::models::NewOffer;
use domain_offers::*;
use test_utils::{TestDataBuilder, TestMongo};

fn new_offer(builder: &TestDataBuilder, n: u64, product: &str) -> Offer {
    Offer::new(NewOffer {
        product: product.to_string(),
        brand: "Pilão".into(),
        code: builder.code(n),
        stock: 10,
        category: "Mercearia".into(),
        price: 12.9,
        expires_on: None,
        starts_on: Some("2026-10-01".into()),
        ends_on: None,
    })
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_offer_listing_is_newest_first_and_paged() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_offer_paging");
    let repo = MongoOfferRepository::new(mongo.database(&builder.database_name()));

    for n in 1..=3 {
        repo.create(new_offer(&builder, n, &format!("Café {n}")))
            .await
            .unwrap();
    }

    let filter = OfferFilter {
        search: Some("caf".into()),
        skip: 1,
        limit: 1,
    };
    assert_eq!(repo.count(filter.clone()).await.unwrap(), 3);

    let page = repo.list(filter).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].product, "Café 2");

    let changes = OfferChanges {
        ends_on: Some("2026-10-31".into()),
        ..Default::default()
    };
    assert!(repo.update(page[0].id, changes).await.unwrap());
    assert!(repo.delete(page[0].id).await.unwrap());
    assert!(!repo.delete(page[0].id).await.unwrap());
}
