//! Coarse industry buckets and per-industry analysis templates

use serde::{Deserialize, Serialize};

use crate::core::{split_entries, KeywordAnalysis};

/// Industry bucket used when explaining a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Education,
    Healthcare,
    Finance,
    Retail,
    Entertainment,
    Manufacturing,
    Agriculture,
    RealEstate,
    Transportation,
    General,
}

/// Bucket keywords in priority order; the first bucket with a hit wins
const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (Industry::Tech, &[
        "科技", "技术", "互联网", "软件", "硬件", "人工智能", "ai", "大数据", "云计算", "区块链",
        "物联网", "5g", "算法", "编程", "开发", "数据", "数字化", "智能", "自动化", "机器人",
        "机器学习", "深度学习", "神经网络",
    ]),
    (Industry::Education, &[
        "教育", "学习", "培训", "学校", "学生", "教师", "课程", "教材", "教学", "知识", "技能",
        "能力", "考试", "成绩", "学位", "学历", "专业", "学科", "学术", "研究",
    ]),
    (Industry::Healthcare, &[
        "医疗", "健康", "医院", "医生", "病人", "疾病", "治疗", "药物", "药品", "保健", "养生",
        "康复", "护理", "诊断", "手术", "中医", "西医", "医药", "生物科技", "基因", "疫苗",
    ]),
    (Industry::Finance, &[
        "金融", "银行", "投资", "理财", "保险", "证券", "股票", "基金", "期货", "外汇", "支付",
        "结算", "信贷", "贷款", "融资", "众筹", "p2p", "区块链", "数字货币", "比特币",
    ]),
    (Industry::Retail, &[
        "零售", "电商", "购物", "消费", "商品", "产品", "品牌", "营销", "销售", "推广", "广告",
        "促销", "价格", "成本", "利润", "供应链", "物流", "仓储", "配送", "快递",
    ]),
    (Industry::Entertainment, &[
        "娱乐", "游戏", "电影", "音乐", "体育", "旅游", "休闲", "文化", "艺术", "演出", "赛事",
        "节目", "视频", "直播", "短视频", "社交", "社区", "内容", "创作", "ip",
    ]),
    (Industry::Manufacturing, &[
        "制造", "工业", "工厂", "生产", "加工", "设备", "机械", "自动化", "智能", "质量", "标准",
        "工艺", "技术", "材料", "零部件", "组装", "装配", "测试", "检测",
    ]),
    (Industry::Agriculture, &[
        "农业", "农村", "农民", "种植", "养殖", "畜牧", "渔业", "林业", "粮食", "蔬菜", "水果",
        "农产品", "食品", "有机", "绿色", "生态", "环保", "可持续发展", "精准扶贫",
    ]),
    (Industry::RealEstate, &[
        "房地产", "房产", "房屋", "住宅", "商业", "写字楼", "物业", "开发", "建设", "建筑", "设计",
        "装修", "装饰", "家居", "家具", "建材", "施工", "工程", "项目",
    ]),
    (Industry::Transportation, &[
        "交通", "运输", "物流", "出行", "汽车", "火车", "飞机", "船舶", "公共交通", "共享", "网约车",
        "出租车", "自行车", "电动车", "充电桩", "道路", "桥梁", "隧道", "港口", "机场",
    ]),
];

/// Detect the industry bucket of free text, `General` when nothing matches
pub fn detect_industry(text: &str) -> Industry {
    let lower = text.to_lowercase();
    if lower.trim().is_empty() {
        return Industry::General;
    }

    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(industry, _)| *industry)
        .unwrap_or(Industry::General)
}

// ═══════════════════════════════════════════════════════════════════════════
// Analysis templates
// ═══════════════════════════════════════════════════════════════════════════

/// Static keyword-analysis template for one industry
struct IndustryTemplate {
    name: &'static str,
    triggers: &'static [&'static str],
    core_function: &'static str,
    key_attributes: &'static [&'static str],
    current_form: &'static str,
    target_users: &'static str,
    usage_scenarios: &'static [&'static str],
    value_chain: &'static str,
    market_trends: &'static str,
    competitive_advantage: &'static str,
    risk_factors: &'static str,
    constraints: &'static str,
}

const TEMPLATES: &[IndustryTemplate] = &[
    IndustryTemplate {
        name: "科技产品",
        triggers: &[
            "app", "软件", "平台", "系统", "智能", "ai", "人工智能", "云计算", "大数据", "物联网", "算法",
            "开发", "技术", "数字", "saas", "api", "代码", "编程", "数字化",
        ],
        core_function: "通过先进技术解决特定用户痛点，提供智能化、高效化的解决方案",
        key_attributes: &["技术创新性", "用户体验优化", "系统稳定性", "扩展灵活性", "数据安全性"],
        current_form: "SaaS平台、移动应用、智能硬件、云端服务、技术解决方案",
        target_users: "企业决策者、技术开发者、终端用户、行业专家、投资机构",
        usage_scenarios: &["日常工作场景", "紧急问题处理", "团队协作沟通", "个人效率提升", "数据分析决策"],
        value_chain: "技术研发->产品设计->市场推广->用户服务->生态建设",
        market_trends: "AI驱动、云端优先、移动化、个性化定制、生态整合",
        competitive_advantage: "技术专利壁垒、品牌影响力、用户规模效应、生态系统完整性",
        risk_factors: "技术迭代风险、市场竞争加剧、用户需求变化、法规政策调整",
        constraints: "研发投入成本、技术人才稀缺、数据隐私合规、跨平台兼容性",
    },
    IndustryTemplate {
        name: "教育服务",
        triggers: &[
            "教育", "学习", "培训", "课程", "学校", "老师", "学生", "知识", "技能", "考试", "教学",
            "在线教育", "学位", "学历", "课堂", "教材", "辅导",
        ],
        core_function: "通过系统化教学方法提升学习效果，培养专业技能和综合素质",
        key_attributes: &["教学内容质量", "互动体验设计", "个性化适配", "学习效果评估", "师资力量"],
        current_form: "在线课程平台、教育APP、智能学习设备、培训服务、内容资源",
        target_users: "学生群体、在职人士、教育机构、企业培训部门、终身学习者",
        usage_scenarios: &["课堂学习", "课后复习", "技能提升", "考试备考", "兴趣培养"],
        value_chain: "内容创作->平台运营->教学服务->效果评估->持续优化",
        market_trends: "在线化、个性化、游戏化、社交化、终身学习",
        competitive_advantage: "优质内容资源、名师团队、技术平台优势、品牌口碑",
        risk_factors: "政策监管变化、内容同质化、用户流失率高、技术更新要求",
        constraints: "师资成本高昂、内容更新压力、用户体验要求高、效果评估难度",
    },
    IndustryTemplate {
        name: "健康医疗",
        triggers: &[
            "健康", "医疗", "医生", "医院", "健身", "运动", "养生", "保健", "诊断", "治疗", "康复",
            "健康管理", "药品", "疫苗", "中医", "西医", "体检",
        ],
        core_function: "通过数字化技术和专业医疗资源整合，提供高效、精准、便捷的健康医疗服务，提升诊疗效率和患者体验",
        key_attributes: &["医疗专业认证", "数据安全合规", "实时响应能力", "多学科协作", "用户隐私保护"],
        current_form: "智能医疗APP、可穿戴健康设备、远程问诊平台、健康管理系统、医疗大数据平台",
        target_users: "慢性病患者、亚健康人群、医疗机构、医生专家、健康管理机构、保险公司",
        usage_scenarios: &[
            "日常健康指标监测与管理", "专科疾病在线咨询与诊断", "术后康复远程指导", "健康风险评估与预防",
            "紧急医疗求助与响应",
        ],
        value_chain: "医疗资源整合->技术服务开发->用户服务交付->保险支付对接->健康数据管理",
        market_trends: "AI辅助诊断、远程医疗普及、个性化健康管理、预防医学优先、医疗数据价值化",
        competitive_advantage: "三甲医院合作资源、AI算法准确率95%+、7×24小时服务、医保对接完备",
        risk_factors: "医疗事故责任界定、数据泄露风险、政策监管变化、专业人才流失",
        constraints: "医疗资质认证复杂、用户信任建立周期长、技术研发投入大、跨区域服务合规要求",
    },
    IndustryTemplate {
        name: "金融服务",
        triggers: &[
            "金融", "银行", "投资", "理财", "保险", "证券", "股票", "基金", "支付", "贷款", "信贷",
            "货币", "比特币", "区块链", "风控", "财富", "资产",
        ],
        core_function: "通过金融科技手段提供安全、高效、智能的金融服务解决方案，降低金融门槛提升服务效率",
        key_attributes: &["资金安全保障", "交易实时性", "风险控制能力", "用户体验优化", "合规风控体系"],
        current_form: "移动支付APP、智能投顾平台、在线借贷服务、数字货币钱包、金融数据分析工具",
        target_users: "个人投资者、小微企业主、金融机构、理财顾问、跨境交易用户",
        usage_scenarios: &[
            "移动端实时转账与支付", "智能投资组合管理与优化", "小微企业快速融资", "跨境汇款与结算",
            "金融数据实时分析与决策",
        ],
        value_chain: "资金募集->风险定价->产品设计->渠道分发->客户服务->风险管控",
        market_trends: "开放银行、嵌入式金融、DeFi去中心化、绿色金融、跨境支付创新",
        competitive_advantage: "银行级安全防护、毫秒级交易处理、智能风控模型、全球牌照布局",
        risk_factors: "系统性金融风险、网络安全威胁、监管政策变化、市场流动性风险",
        constraints: "合规成本高昂、技术安全要求极高、用户信任建立困难、市场竞争激烈",
    },
    IndustryTemplate {
        name: "零售电商",
        triggers: &[
            "零售", "电商", "购物", "消费", "商品", "产品", "品牌", "营销", "销售", "推广", "广告",
            "促销", "价格", "供应链", "物流", "仓储", "配送",
        ],
        core_function: "构建数字化零售生态系统，通过技术创新提升商品流通效率，优化消费者购物体验",
        key_attributes: &["供应链效率", "价格竞争力", "用户体验设计", "数据驱动运营", "物流配送能力"],
        current_form: "电商平台、社交电商APP、新零售门店、直播带货、供应链管理系统",
        target_users: "终端消费者、品牌商家、小微店主、内容创作者、物流服务商",
        usage_scenarios: &["移动端随时随地购物", "直播实时互动购买", "线下体验线上下单", "社交分享裂变获客", "智能推荐个性化购物"],
        value_chain: "商品采购->仓储管理->平台运营->营销推广->订单履约->售后服务",
        market_trends: "直播电商、社交电商、即时零售、AR试穿试妆、可持续消费",
        competitive_advantage: "强大供应链网络、AI推荐算法、物流配送体系、用户数据积累",
        risk_factors: "假冒伪劣商品风险、用户数据隐私泄露、物流配送延误、市场竞争白热化",
        constraints: "库存管理复杂度高、获客成本持续上升、用户体验要求极高、退货率控制难度大",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl IndustryTemplate {
    fn to_analysis(&self) -> KeywordAnalysis {
        KeywordAnalysis {
            core_function: self.core_function.to_string(),
            key_attributes: owned(self.key_attributes),
            current_form: self.current_form.to_string(),
            target_users: self.target_users.to_string(),
            usage_scenarios: owned(self.usage_scenarios),
            value_chain: self.value_chain.to_string(),
            market_trends: self.market_trends.to_string(),
            competitive_advantage: self.competitive_advantage.to_string(),
            risk_factors: self.risk_factors.to_string(),
            constraints: split_entries(self.constraints),
        }
    }
}

/// Generic template for topics outside the five known industries
fn generic_template(topic: &str) -> KeywordAnalysis {
    KeywordAnalysis {
        core_function: format!("通过创新解决方案解决{}领域的核心问题，提供独特价值主张", topic),
        key_attributes: owned(&["技术创新性", "用户体验优化", "商业可行性", "市场适应性", "可持续发展"]),
        current_form: "综合性解决方案平台，整合技术、服务、内容等多维度要素".to_string(),
        target_users: "行业从业者、终端用户、合作伙伴、投资者、监管机构".to_string(),
        usage_scenarios: owned(&["日常工作场景应用", "特殊需求场景解决", "紧急情况处理", "长期价值创造", "生态协同合作"]),
        value_chain: "需求发现->方案设计->技术实现->市场推广->价值交付->持续优化".to_string(),
        market_trends: "数字化转型、用户体验优先、生态协同、可持续发展、智能化升级".to_string(),
        competitive_advantage: "综合解决方案能力、快速迭代响应、用户深度洞察、生态合作伙伴网络".to_string(),
        risk_factors: "技术迭代风险、市场竞争加剧、用户需求变化、政策环境调整".to_string(),
        constraints: owned(&["资源投入限制", "技术实现复杂度", "市场接受度", "合规要求挑战"]),
    }
}

/// Template whose triggers match `topic`, `None` for the generic one
fn find_template(topic: &str) -> Option<&'static IndustryTemplate> {
    let lower = topic.to_lowercase();
    TEMPLATES.iter().find(|t| t.triggers.iter().any(|k| lower.contains(k)))
}

/// Keyword-analysis template for `topic`
pub fn match_industry_template(topic: &str) -> KeywordAnalysis {
    match find_template(topic) {
        Some(template) => {
            tracing::debug!("Using {} template for '{}'", template.name, topic);
            template.to_analysis()
        }
        None => generic_template(topic),
    }
}
