//! Built-in suggestion material for the nine dimensions: classic Osborn
//! examples used as inspiration, and topic-parameterised base suggestions

use crate::core::Dimension;
use crate::random::RandomSource;

const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Classic innovation examples per dimension
pub fn examples(dimension: Dimension) -> &'static [&'static str] {
    match dimension {
        Dimension::Ta => &[
            "花生300种用途：从食品到工业原料的全面应用",
            "X射线技术迁移：从医疗诊断扩展到安检和材料检测",
            "GPS技术民用：从军事导航到日常生活导航",
            "激光技术多元化：从科研工具到医疗、工业、娱乐应用",
            "超声波技术扩展：从医疗检查到清洁、焊接、测距",
            "红外线技术应用：从军事侦察到体温检测、遥控器",
            "磁悬浮技术转移：从实验室到高速列车、轴承应用",
            "纳米技术产业化：从材料科学到化妆品、医药、电子",
            "3D打印技术普及：从原型制作到建筑、医疗、食品",
            "区块链技术扩展：从数字货币到供应链、版权保护",
        ],
        Dimension::Jie => &[
            "微爆破技术医疗应用：医生引入微爆破技术消除肾结石",
            "电吹风工业应用：借鉴到工业生产中用于快速烘干油漆",
            "3D食品打印机：将3D打印技术借鉴到食品加工领域",
            "仿生学设计：借鉴动植物结构设计飞机、建筑、材料",
            "游戏化教育：将游戏机制借用到教育培训中",
            "军用技术民用：将雷达、卫星技术借用到民用领域",
            "医疗器械工业化：将精密医疗技术借用到制造业",
            "自然界启发设计：借鉴蜂巢结构设计建筑材料",
            "体育科学商业化：将运动训练方法借用到企业管理",
            "艺术技法工业应用：将绘画技术借用到产品设计",
        ],
        Dimension::Gai => &[
            "福特汽车颜色变化：从单一黑色到多彩选择",
            "平面镜变哈哈镜：改变镜面形状创造娱乐效果",
            "传统教育在线化：改变教学形式和互动方式",
            "纸质媒体数字化：改变信息传播载体和形式",
            "现金支付电子化：改变交易方式和支付流程",
            "实体店铺虚拟化：改变购物环境和体验方式",
            "线性生产柔性化：改变制造流程和组织方式",
            "固定办公远程化：改变工作地点和协作模式",
            "标准产品定制化：改变生产模式和用户体验",
            "单向传播互动化：改变媒体形态和用户参与",
        ],
        Dimension::Kuo => &[
            "药物牙膏：在普通牙膏基础上增加药物功能",
            "防弹玻璃创新：扩大玻璃的防护功能和应用范围",
            "智能手机功能扩展：从通讯工具到生活助手",
            "电商平台生态化：从购物网站到综合服务平台",
            "社交媒体多元化：从交流工具到商业营销平台",
            "搜索引擎智能化：从信息检索到知识服务",
            "云计算服务化：从存储工具到计算平台",
            "移动支付生态化：从支付工具到金融服务",
            "在线教育平台化：从课程提供到教育生态",
            "共享经济规模化：从单一服务到多元共享",
        ],
        Dimension::Suo => &[
            "袖珍收音机：将大型收音机微型化便携化",
            "微型医疗器械：缩小医疗设备体积提高便携性",
            "迷你电脑：将台式机功能压缩到小型设备",
            "便携式投影仪：缩小传统投影设备体积",
            "折叠自行车：缩小存储空间提高便携性",
            "胶囊咖啡机：简化咖啡制作流程和设备体积",
            "即时通讯简化：从复杂通讯到简单消息传递",
            "快餐标准化：简化餐饮制作和服务流程",
            "一键操作设计：简化复杂功能到单一操作",
            "专业工具家用化：缩小专业设备到家用规模",
        ],
        Dimension::Ti => &[
            "纸质铅笔：用纸卷替代木材制作铅笔外壳",
            "植物基人造肉：用植物蛋白替代动物蛋白",
            "电子书替代纸书：用数字媒体替代纸质载体",
            "LED替代白炽灯：用半导体照明替代传统照明",
            "电动车替代燃油车：用电力驱动替代燃油驱动",
            "视频会议替代出差：用远程技术替代面对面会议",
            "机器人替代人工：用自动化替代人工操作",
            "云存储替代本地存储：用网络存储替代物理存储",
            "移动支付替代现金：用电子支付替代纸币交易",
            "人工智能替代传统算法：用深度学习替代规则系统",
        ],
        Dimension::Tiao => &[
            "飞机螺旋桨位置调整：改变螺旋桨安装位置提高效率",
            "生产线重组：调整生产流程顺序提高效率",
            "网站布局优化：调整页面元素位置改善用户体验",
            "工作流程再造：重新安排工作步骤提高效率",
            "供应链优化：调整供应商顺序和配送路径",
            "课程安排调整：重新安排教学内容和时间分配",
            "团队结构重组：调整人员配置和职责分工",
            "产品功能排序：调整功能优先级和展示顺序",
            "服务流程优化：重新设计客户服务步骤",
            "数据处理管道：调整数据处理的顺序和方法",
        ],
        Dimension::Dao => &[
            "电动机发明：颠倒发电机原理创造电动机",
            "反向拍卖模式：买家出价卖家竞争的颠倒模式",
            "逆向物流：从消费者到生产者的反向供应链",
            "反向学习：从结果推导过程的教学方法",
            "逆向工程：从产品分析设计和制造过程",
            "反向营销：让客户主动寻找产品的营销策略",
            "颠倒课堂：学生在家学习在校讨论的教学模式",
            "反向创新：从新兴市场向发达市场的创新扩散",
            "逆向思维设计：从用户需求反推产品功能",
            "反向供应链：从废品回收到资源再利用",
        ],
        Dimension::He => &[
            "带橡皮铅笔：将铅笔和橡皮合并为一体",
            "智能手机集成：将电话、相机、电脑等功能合并",
            "一体化办公软件：将文档、表格、演示合并",
            "智能家居系统：将各种家电设备联网集成",
            "移动支付生态：将支付、理财、生活服务合并",
            "云办公平台：将通讯、协作、存储功能集成",
            "智能汽车系统：将导航、娱乐、通讯功能合并",
            "多功能工具：将多种工具功能集成到一个产品中",
            "综合服务平台：将不同服务整合到统一平台",
            "跨界产品融合：将不同行业的产品特性进行合并",
        ],
    }
}

fn base_templates(dimension: Dimension) -> &'static [&'static str] {
    match dimension {
        Dimension::Ta => &[
            "将{topic}应用到教育培训领域，开发专业课程体系",
            "{topic}在医疗健康场景的创新应用探索",
            "{topic}为老年群体提供适老化服务方案",
            "{topic}在智慧城市建设中的应用潜力",
        ],
        Dimension::Jie => &[
            "借鉴游戏化机制，提升{topic}的用户参与度和粘性",
            "引入人工智能技术，优化{topic}的核心算法和流程",
            "学习共享经济模式，重构{topic}的商业运营逻辑",
            "参考订阅制服务，创新{topic}的盈利模式",
        ],
        Dimension::Gai => &[
            "将{topic}的交互方式改为语音控制或手势操作",
            "改变{topic}的材质为环保可持续的新型材料",
            "将{topic}的服务模式从B2C转向B2B2C",
            "重新设计{topic}的用户界面，提升易用性",
        ],
        Dimension::Kuo => &[
            "扩大{topic}的服务半径，覆盖更广泛的地理区域",
            "增加{topic}的功能模块，形成完整的产品生态",
            "延长{topic}的生命周期，提高整体性价比",
            "拓展{topic}的用户群体，覆盖不同年龄段",
        ],
        Dimension::Suo => &[
            "简化{topic}的操作流程，突出最核心的功能价值",
            "缩小{topic}的体积规格，提高便携性和灵活性",
            "专注{topic}的单一功能，做到行业内的极致体验",
            "降低{topic}的使用门槛，让普通用户也能轻松上手",
        ],
        Dimension::Ti => &[
            "用数字化虚拟技术替代{topic}的物理实现方式",
            "寻找{topic}核心组件的低成本高效替代方案",
            "用自动化智能设备替代{topic}的人工操作环节",
            "探索{topic}原材料的环保替代品和新工艺",
        ],
        Dimension::Tiao => &[
            "调整{topic}的使用时序，优化用户的操作体验",
            "重新设计{topic}的功能布局，提升界面友好度",
            "调整{topic}的定价策略，适应不同市场需求",
            "优化{topic}的供应链流程，提高运营效率",
        ],
        Dimension::Dao => &[
            "让用户从{topic}的消费者转变为内容生产者",
            "将{topic}的付费模式改为免费增值服务",
            "颠倒{topic}的传统使用场景和应用时间",
            "反转{topic}的价值流向，创造双向价值交换",
        ],
        Dimension::He => &[
            "将{topic}与社交网络功能深度整合，增强用户互动",
            "整合{topic}与移动支付系统，形成商业闭环",
            "结合{topic}与大数据分析，提供智能化建议",
            "融合{topic}与物联网技术，实现万物互联",
        ],
    }
}

/// Four generic suggestions for `topic` under `dimension`
pub fn base_suggestions(dimension: Dimension, topic: &str) -> Vec<String> {
    base_templates(dimension)
        .iter()
        .map(|template| template.replace(TOPIC_PLACEHOLDER, topic))
        .collect()
}

/// Suggestion drawn from a random classic example of `dimension`
pub fn inspired_suggestion(dimension: Dimension, topic: &str, random: &mut dyn RandomSource) -> Option<String> {
    let examples = examples(dimension);
    if examples.is_empty() {
        return None;
    }
    let example = examples[random.pick(examples.len())];
    Some(format!("参考\"{}\"的思路，为{}创造类似的创新突破", example, topic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn test_every_dimension_has_material() {
        for dimension in Dimension::ALL {
            assert_eq!(examples(dimension).len(), 10);
            assert_eq!(base_suggestions(dimension, "咖啡杯").len(), 4);
        }
    }

    #[test]
    fn test_base_suggestions_fill_topic() {
        for dimension in Dimension::ALL {
            for suggestion in base_suggestions(dimension, "咖啡杯") {
                assert!(suggestion.contains("咖啡杯"), "{}", suggestion);
                assert!(!suggestion.contains(TOPIC_PLACEHOLDER));
            }
        }
    }

    #[test]
    fn test_inspired_suggestion_uses_random_source() {
        let mut random = SequenceRandom::new(vec![0.0, 0.95]);
        let first = inspired_suggestion(Dimension::He, "咖啡杯", &mut random).unwrap();
        let last = inspired_suggestion(Dimension::He, "咖啡杯", &mut random).unwrap();

        assert_eq!(first, "参考\"带橡皮铅笔：将铅笔和橡皮合并为一体\"的思路，为咖啡杯创造类似的创新突破");
        assert!(last.contains("跨界产品融合"));
    }
}
