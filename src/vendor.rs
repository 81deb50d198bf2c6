/// Map-service vendors with known probe endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Amap,
    Baidu,
    Tencent,
    Unknown,
}

impl Vendor {
    /// Lowercase tag used in output blocks and log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Vendor::Amap => "amap",
            Vendor::Baidu => "baidu",
            Vendor::Tencent => "tencent",
            Vendor::Unknown => "unknown",
        }
    }
}

/// Map a domain+path to a vendor. Case-sensitive substring containment,
/// first match wins.
pub fn classify(domain_path: &str) -> Vendor {
    if domain_path.contains("amap.com") {
        Vendor::Amap
    } else if domain_path.contains("baidu.com") {
        Vendor::Baidu
    } else if domain_path.contains("map.qq.com") || domain_path.contains("qq.com") {
        Vendor::Tencent
    } else {
        Vendor::Unknown
    }
}
