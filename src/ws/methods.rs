/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Remote procedures exposed by the gallery web service.
///
/// The set is fixed: the service routes on the `method` form field and these
/// are the names it understands. `Display`/`FromStr` round-trip the exact
/// wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Method {
    #[strum(to_string = "pwg.getVersion")]
    GetVersion,

    #[strum(to_string = "reflection.getMethodList")]
    ReflectionGetMethodList,

    #[strum(to_string = "pwg.session.login")]
    SessionLogin,

    #[strum(to_string = "pwg.session.logout")]
    SessionLogout,

    #[strum(to_string = "pwg.session.getStatus")]
    SessionGetStatus,

    #[strum(to_string = "pwg.tags.getList")]
    TagsGetList,

    #[strum(to_string = "pwg.tags.getImages")]
    TagsGetImages,

    #[strum(to_string = "pwg.tags.add")]
    TagsAdd,

    #[strum(to_string = "pwg.categories.getList")]
    CategoriesGetList,

    #[strum(to_string = "pwg.categories.getImages")]
    CategoriesGetImages,

    #[strum(to_string = "pwg.categories.add")]
    CategoriesAdd,

    #[strum(to_string = "pwg.categories.delete")]
    CategoriesDelete,

    #[strum(to_string = "pwg.categories.move")]
    CategoriesMove,

    #[strum(to_string = "pwg.categories.setRepresentative")]
    CategoriesSetRepresentative,

    #[strum(to_string = "pwg.categories.deleteRepresentative")]
    CategoriesDeleteRepresentative,

    #[strum(to_string = "pwg.categories.refreshRepresentative")]
    CategoriesRefreshRepresentative,

    #[strum(to_string = "pwg.categories.setInfo")]
    CategoriesSetInfo,

    #[strum(to_string = "pwg.categories.setRank")]
    CategoriesSetRank,

    #[strum(to_string = "pwg.images.getInfo")]
    ImagesGetInfo,

    #[strum(to_string = "pwg.images.setInfo")]
    ImagesSetInfo,

    #[strum(to_string = "pwg.images.setRank")]
    ImagesSetRank,

    #[strum(to_string = "pwg.images.search")]
    ImagesSearch,

    #[strum(to_string = "pwg.images.rate")]
    ImagesRate,

    #[strum(to_string = "pwg.images.delete")]
    ImagesDelete,

    #[strum(to_string = "pwg.images.addComment")]
    ImagesAddComment,

    #[strum(to_string = "pwg.images.exist")]
    ImagesExist,

    #[strum(to_string = "pwg.extensions.checkUpdates")]
    ExtensionsCheckUpdates,

    #[strum(to_string = "pwg.extensions.update")]
    ExtensionsUpdate,

    #[strum(to_string = "pwg.extensions.ignoreUpdate")]
    ExtensionsIgnoreUpdate,

    #[strum(to_string = "pwg.rates.delete")]
    RatesDelete,

    #[strum(to_string = "pwg.users.setInfo")]
    UsersSetInfo,

    #[strum(to_string = "pwg.users.favorites.add")]
    UsersFavoritesAdd,

    #[strum(to_string = "pwg.users.favorites.remove")]
    UsersFavoritesRemove,

    #[strum(to_string = "pwg.users.favorites.getList")]
    UsersFavoritesGetList,
}
