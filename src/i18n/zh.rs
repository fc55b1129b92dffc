//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::SystemsHeader, "系统");
    m.insert(Key::ToggleTheme, "切换主题");

    // Search
    m.insert(Key::SearchPlaceholder, "按名称或代码搜索");
    m.insert(Key::SearchLoading, "加载中...");
    m.insert(Key::SearchNoResults, "未找到系统");
    m.insert(Key::SearchFailed, "搜索失败");
    m.insert(Key::Retry, "重试");

    // Result rows
    m.insert(Key::RowName, "名称: ");
    m.insert(Key::RowCode, "代码:");
    m.insert(Key::RowParent, "上级:");

    // Details pane
    m.insert(Key::DetailsConfiguration, "配置");
    m.insert(Key::DetailsMaintenance, "维护记录");
    m.insert(Key::DetailsNoConfiguration, "暂无配置项");
    m.insert(Key::DetailsNoMaintenance, "暂无维护记录");
    m.insert(Key::DetailsLoadFailed, "加载失败");
    m.insert(Key::Close, "关闭");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
