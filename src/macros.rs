//! 组件构造相关的宏定义
//!
//! 简化 `配置 => 组件` 以及 `Box<组件> => Box<dyn Trait>` 的 From 实现

/// 为配置类型自动实现 From trait
///
/// 用法：`impl_from!(ConfigType => Type)`，调用 Type::new(config)
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为 Box<T> 实现到 Box<dyn Trait> 的转换
///
/// 用法：`impl_box_from!(ConsoleSink => dyn LogSink)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}
