//! MongoDB integration tests for the product repository.
//!
//! Require Docker: `cargo test -p domain_products -- --ignored`

use domain_products::models::NewProduct;
use domain_products::*;
use ::mongodb::bson::{Document, doc};
use test_utils::{TestDataBuilder, TestMongo};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_numbers_are_stored_typed() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_product_types");
    let db = mongo.database(&builder.database_name());
    let repo = MongoProductRepository::new(db.clone());

    let product = repo
        .create(Product::new(NewProduct {
            name: builder.name("product", "1"),
            code: builder.code(1),
            stock: 5,
            category: "Laticínios".into(),
            brand: "Vaca Feliz".into(),
            price: 19.9,
            expires_on: None,
        }))
        .await
        .unwrap();

    let raw = db
        .collection::<Document>("produtos")
        .find_one(doc! { "_id": product.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(raw.get_i64("estoque").unwrap(), 5);
    assert_eq!(raw.get_f64("valor").unwrap(), 19.9);

    let changes = ProductChanges {
        price: Some(21.0),
        ..Default::default()
    };
    assert!(repo.update(product.id, changes).await.unwrap());

    let search = ProductFilter {
        search: Some("vaca".into()),
        skip: 0,
        limit: 10,
    };
    let found = repo.list(search).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].price, 21.0);
}
