use recipe_box::{build_cards, CommunityClient, FeedError};

#[tokio::test]
async fn fetches_and_maps_recipe_summaries() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"
    {
        "recipes": [
            { "title": "Pasta Carbonara", "image": "https://img.test/pasta.jpg" },
            { "title": "Imageless Stew" },
            { "title": "Empty Image Soup", "image": "" }
        ]
    }
    "#;

    let mock = server
        .mock("GET", "/recipes/random")
        .match_query(mockito::Matcher::UrlEncoded("number".into(), "3".into()))
        .match_header("x-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = CommunityClient::new(server.url(), "test-key", 3);
    let summaries = client.fetch_random().await.unwrap();
    mock.assert_async().await;

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].title, "Pasta Carbonara");
    assert_eq!(summaries[0].image, "https://img.test/pasta.jpg");
    // Missing and empty images both fall back to the placeholder.
    assert_eq!(summaries[1].image, "https://via.placeholder.com/300");
    assert_eq!(summaries[2].image, "https://via.placeholder.com/300");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/random")
        .match_query(mockito::Matcher::Any)
        .with_status(402)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let client = CommunityClient::new(server.url(), "test-key", 5);
    let err = client.fetch_random().await.unwrap_err();
    assert!(matches!(err, FeedError::BadStatus(402)));
}

#[tokio::test]
async fn malformed_body_is_a_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/random")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client = CommunityClient::new(server.url(), "test-key", 5);
    let err = client.fetch_random().await.unwrap_err();
    assert!(matches!(err, FeedError::FetchError(_)));
}

#[tokio::test]
async fn fetched_summaries_become_authored_cards() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{ "recipes": [ { "title": "A", "image": "https://img.test/a.jpg" },
                                  { "title": "B", "image": "https://img.test/b.jpg" } ] }"#;
    let _m = server
        .mock("GET", "/recipes/random")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = CommunityClient::new(server.url(), "test-key", 2);
    let summaries = client.fetch_random().await.unwrap();
    let authors = vec!["NeonViper".to_string()];
    let cards = build_cards(summaries, &authors);

    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|c| c.author == "NeonViper"));
    assert!(cards.iter().all(|c| !c.liked));
}
