//! One askama template per content type.
//!
//! Every template extends `base.html`, which renders the site header.

use askama::Template;

use super::{PageContext, PageData};
use crate::components::HeaderView;

#[derive(Template)]
#[template(path = "pages/category.html")]
struct CategoryTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/tag.html")]
struct TagTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/front_page.html")]
struct FrontPageTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/shop.html")]
struct ShopTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/search.html")]
struct SearchTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/product_category.html")]
struct ProductCategoryTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/page.html")]
struct PageTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/single.html")]
struct SingleTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

#[derive(Template)]
#[template(path = "pages/product.html")]
struct ProductTemplate<'a> {
    header: &'a HeaderView,
    page: &'a PageData,
}

pub fn category(ctx: &PageContext) -> askama::Result<String> {
    CategoryTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn tag(ctx: &PageContext) -> askama::Result<String> {
    TagTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn front_page(ctx: &PageContext) -> askama::Result<String> {
    FrontPageTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn shop(ctx: &PageContext) -> askama::Result<String> {
    ShopTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn search(ctx: &PageContext) -> askama::Result<String> {
    SearchTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn product_category(ctx: &PageContext) -> askama::Result<String> {
    ProductCategoryTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn page(ctx: &PageContext) -> askama::Result<String> {
    PageTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn single(ctx: &PageContext) -> askama::Result<String> {
    SingleTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}

pub fn product(ctx: &PageContext) -> askama::Result<String> {
    ProductTemplate {
        header: &ctx.header,
        page: &ctx.page,
    }
    .render()
}
