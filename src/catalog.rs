use crate::vendor::Vendor;

/// One probe endpoint for a vendor. `url_template` carries a single `{value}`
/// placeholder for the key.
#[derive(Debug)]
pub struct ProbeTemplate {
    pub api_name: &'static str,
    pub url_template: &'static str,
}

impl ProbeTemplate {
    /// Substitute the key into the template's placeholder.
    pub fn render(&self, key: &str) -> String {
        self.url_template.replace("{value}", key)
    }
}

const AMAP_TEMPLATES: &[ProbeTemplate] = &[
    ProbeTemplate {
        api_name: "高德 Web API",
        url_template: "https://restapi.amap.com/v3/direction/walking?origin=116.434307,39.90909&destination=116.434446,39.90816&key={value}",
    },
    ProbeTemplate {
        api_name: "高德 JS API",
        url_template: "https://restapi.amap.com/v3/geocode/regeo?key={value}&s=rsv3&location=116.434446,39.90816&callback=jsonp_258885_&platform=JS",
    },
    ProbeTemplate {
        api_name: "高德小程序",
        url_template: "https://restapi.amap.com/v3/geocode/regeo?key={value}&location=117.19674%2C39.14784&extensions=a11&s=rsx&platform=WXJS&appname=c589cf63f592ac13bcab35f8cd18f495&sdkversion=1.2.0&logversion=2.0",
    },
];

const BAIDU_TEMPLATES: &[ProbeTemplate] = &[
    ProbeTemplate {
        api_name: "百度 Web API",
        url_template: "https://api.map.baidu.com/place/v2/search?query=ATM机&tag=银行&region=北京&output=json&ak={value}",
    },
    ProbeTemplate {
        api_name: "百度 iOS API",
        url_template: "https://api.map.baidu.com/place/v2/search?query=ATM#l&tag=Rf&region=#L#&output=json&ak={value}=iPhone7%2C2&mcode=com.didapinche.taxi&os=12.5.6",
    },
];

const TENCENT_TEMPLATES: &[ProbeTemplate] = &[
    ProbeTemplate {
        api_name: "腾讯 Web API",
        url_template: "https://apis.map.qq.com/ws/place/v1/search?keyword=酒店&boundary=nearby(39.908491,116.374328,1000)&key={value}",
    },
];

/// Probe endpoints for a vendor, in probing order. `None` for vendors we
/// cannot probe.
pub fn templates(vendor: Vendor) -> Option<&'static [ProbeTemplate]> {
    match vendor {
        Vendor::Amap => Some(AMAP_TEMPLATES),
        Vendor::Baidu => Some(BAIDU_TEMPLATES),
        Vendor::Tencent => Some(TENCENT_TEMPLATES),
        Vendor::Unknown => None,
    }
}
