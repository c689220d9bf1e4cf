//! 对象缓存
//!
//! 缓存后端通过 `declare_object_cache_plugin!` 在进程启动时注册，
//! 启动阶段按 `cache.type` 选择具体实现。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache, get_json, insert_json};

/// 声明并注册一个缓存插件
///
/// 被注册的类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ident) => {
        paste::paste! {
            #[ctor::ctor]
            unsafe fn [<__register_object_cache_ $ty:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                        Box::pin(async {
                            let cache: $crate::errors::Result<Box<dyn $crate::cache::ObjectCache>> =
                                $ty::new()
                                    .map(|c| Box::new(c) as Box<dyn $crate::cache::ObjectCache>)
                                    .map_err($crate::errors::SchoolHubError::cache_connection);
                            cache
                        })
                    }),
                );
            }
        }
    };
}
