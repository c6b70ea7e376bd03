use super::self_prelude::*;

pub fn editor_schema() -> ModelSchema {
    ModelSchemaBuilder::new("Editor")
        .define_required_field("first_name", FieldKind::Scalar(ScalarKind::String))
        .define_scalar("last_name", ScalarKind::String)
        .finish()
}

pub fn article_schema() -> ModelSchema {
    ModelSchemaBuilder::new("Article")
        .define_required_field("headline", FieldKind::Scalar(ScalarKind::String))
        .define_scalar("pub_date", ScalarKind::DateTime)
        .define_reference("editor", "Editor")
        .finish()
}

pub fn embedded_article_schema() -> ModelSchema {
    ModelSchemaBuilder::new("EmbeddedArticle")
        .define_scalar("headline", ScalarKind::String)
        .finish()
}

pub fn reporter_schema() -> ModelSchema {
    ModelSchemaBuilder::new("Reporter")
        .define_required_field("first_name", FieldKind::Scalar(ScalarKind::String))
        .define_required_field("last_name", FieldKind::Scalar(ScalarKind::String))
        .define_scalar("email", ScalarKind::Email)
        .define_field("awards", FieldKind::ScalarList(ScalarKind::String))
        .define_reference_list("articles", "Article")
        .define_field(
            "embedded_articles",
            FieldKind::EmbeddedList("EmbeddedArticle".into()),
        )
        .define_field("generic", FieldKind::Unsupported("GenericReference".into()))
        .finish()
}
