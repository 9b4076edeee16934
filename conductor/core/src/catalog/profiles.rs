//! Result profiles, one per category, in declaration order.

use super::{Category, CategoryProfile, Rgb, Theme};

pub(super) const PROFILES: [CategoryProfile; Category::COUNT] = [
    CategoryProfile {
        category: Category::A,
        name: "言語の魔術師",
        alias: "Word Wizard",
        theme: Theme {
            accent: Rgb(8, 145, 178),
            gradient_from: Rgb(34, 211, 238),
            gradient_to: Rgb(59, 130, 246),
        },
        skill: "【召喚魔法】高度言語モデル / プロンプト設計",
        description: "言葉で世界を定義する論理の支配者",
        features_title: "論理で殴るのが好き",
        features: "あなたは感情論よりも「定義」や「構造」を好むタイプ。会話の中で「それってどういう定義？」と聞きたくなる衝動を抑えているかもしれません。曖昧な指示を嫌い、複雑な事象をパズルのように分解して整理することに、一種の快感を覚えます。",
        reason: "生成AIの本質は「言葉によるプログラミング」です。あなたの持つ「言語化能力」と「論理的思考」は、AIに対する最強の指揮棒となります。多くの人がAIに曖昧な指示を出して失敗する中、あなたは正確無比な呪文（プロンプト）で、AIの性能を100%引き出せます。",
        monetization: "【プロンプトエンジニア / 技術ライター】\n企業向けに「絶対に誤作動しない業務効率化プロンプト」を設計・販売するのが最短ルート。また、専門知識をAIと壁打ちしながら体系化し、技術書やノウハウ記事を爆速で出版する「AI共著」も、印税収入と権威性を同時に得られる賢い戦略です。",
    },
    CategoryProfile {
        category: Category::B,
        name: "幻想の錬金術師",
        alias: "Visual Alchemist",
        theme: Theme {
            accent: Rgb(219, 39, 119),
            gradient_from: Rgb(244, 114, 182),
            gradient_to: Rgb(244, 63, 94),
        },
        skill: "【創造魔法】画像生成AI / デザイン自動化",
        description: "無から有を生むクリエイティブモンスター",
        features_title: "説明書は読まない派",
        features: "理屈よりも「直感」と「美意識」で生きているタイプ。「なんかいい感じ」という感覚を言語化するのは苦手でも、ビジュアルで表現するのは得意。頭の中には常に、現実世界よりも鮮やかな妄想ワールドが広がっています。",
        reason: "画像生成AIは「偶然の奇跡（ガチャ）」を楽しむツールです。論理でガチガチに固めるよりも、AIが出してきた予想外の絵を「これ面白くない？」と面白がれるあなたの感性が最大の武器。AIはあなたの脳内イメージを具現化するための「賢い絵筆」になります。",
        monetization: "【AI広告クリエイター / 素材販売】\n「架空のモデル」を使った写真集販売や、企業のSNS広告画像の制作代行が熱い市場です。あなたの美的センスで厳選した画像をストックフォトとして販売したり、スタンプ等を量産するなど、「数打ちゃ当たる」戦略をAIで超高速化できます。",
    },
    CategoryProfile {
        category: Category::C,
        name: "絡繰の技師",
        alias: "Automation Engineer",
        theme: Theme {
            accent: Rgb(71, 85, 105),
            gradient_from: Rgb(148, 163, 184),
            gradient_to: Rgb(107, 114, 128),
        },
        skill: "【自動化魔法】ワークフロー自動化 / API連携",
        description: "自分が動かず世界を回す効率の悪魔",
        features_title: "「面倒くさい」が最大の原動力",
        features: "同じ作業を2回繰り返すのが死ぬほど嫌いなタイプ。「もっと楽な方法があるはず」と常にショートカットを探しています。あなたが努力するのは「将来の自分がサボるため」であり、そのための労力は惜しまない「勤勉な怠け者」です。",
        reason: "AI単体ではなく、AI同士を繋げて全自動の工場（ワークフロー）を作ることに天才的な適性があります。あなたはプレイヤーとして戦うのではなく、無数のAIボットを指揮する「将軍」になるべきです。寝ている間に仕事が終わっている快感は、あなただけのものです。",
        monetization: "【業務自動化コンサルタント】\n中小企業の面倒な事務作業（請求書処理や日程調整）をAIで全自動化するシステムを構築し、月額保守料をもらうビジネスモデルが最強。「一度作れば終わり」の仕組みを量産することで、労働時間に比例しない「不労所得的」な収益柱を築けます。",
    },
    CategoryProfile {
        category: Category::D,
        name: "真理の探求者",
        alias: "Deep Seeker",
        theme: Theme {
            accent: Rgb(79, 70, 229),
            gradient_from: Rgb(129, 140, 248),
            gradient_to: Rgb(139, 92, 246),
        },
        skill: "【解析魔法】検索AI / データ分析",
        description: "情報の海から真実を釣り上げる賢者",
        features_title: "ソースがないと信じない",
        features: "疑り深く、納得いくまで調べないと気が済まないタイプ。ネットの噂話よりも「一次情報はどこ？」とデータを確認する癖があります。オタク気質があり、興味を持ったことはとことん深掘りするため、特定分野の知識量は異常なレベルになりがちです。",
        reason: "AIは平気で嘘をつきますが、あなたはそれを見抜く「鑑識眼」を持っています。AIを「超高速のリサーチャー」として使いこなし、膨大な論文やデータを要約・分析させることで、人間一人では到達できない知の領域にアクセスできます。",
        monetization: "【特化型レポート販売 / 投資分析】\n「AI関連の最新技術要約」や「特定業界の市場動向レポート」など、精度の高い情報をnoteや有料記事で販売しましょう。AIを使って情報の収集・要約コストを極限まで下げつつ、あなたの「洞察（インサイト）」を付加価値として売るモデルです。",
    },
    CategoryProfile {
        category: Category::E,
        name: "旋律の吟遊詩人",
        alias: "Trend Bard",
        theme: Theme {
            accent: Rgb(147, 51, 234),
            gradient_from: Rgb(192, 132, 252),
            gradient_to: Rgb(217, 70, 239),
        },
        skill: "【魅了魔法】動画生成AI / 音声合成",
        description: "流行の波を乗りこなすカリスマ",
        features_title: "飽きっぽいのは進化の証",
        features: "「楽しいか、つまらないか」が全ての判断基準。新しいもの好きで、流行には敏感。難しい理屈よりも、人の感情を揺さぶるストーリーや、ノリの良い音楽、インパクトのある動画が好き。場を盛り上げる才能の持ち主です。",
        reason: "今のAIトレンドは「動画」と「音楽」です。あなたの「バズる感覚」をAIに教え込めば、ショート動画やSNSで再生数を稼ぐコンテンツを量産できます。クオリティよりもスピードとインパクト勝負の今のSNS戦国時代において、あなたは最強の武将です。",
        monetization: "【AIインフルエンサー / ショート動画】\n顔出し不要のAIアバターを使って、流行のダンスやミーム動画を量産し、広告収益や企業案件で稼ぐのが王道。また、AIで作ったBGMやナレーション素材を配信するなど、エンタメの力でファンを集めるビジネスが向いています。",
    },
    CategoryProfile {
        category: Category::F,
        name: "聖なる治癒士",
        alias: "Mental Healer",
        theme: Theme {
            accent: Rgb(5, 150, 105),
            gradient_from: Rgb(52, 211, 153),
            gradient_to: Rgb(20, 184, 166),
        },
        skill: "【対話魔法】AIペルソナ設計 / チャットボット",
        description: "AIに心を宿す唯一無二の媒介者",
        features_title: "人の痛みがわかる優しさ",
        features: "感受性が豊かで、他人の感情に敏感なタイプ。競争やマウントの取り合いよりも、平和で優しい世界を好みます。友人の相談に乗ることが多く、相手が何と言って欲しいのかを直感的に察知できる能力があります。",
        reason: "AIはただの計算機ですが、そこに「人格（ペルソナ）」を宿らせることができるのは、あなたの人間理解力だけです。ユーザーが話していて心地よいと感じる話し方、間合い、共感の言葉をAIに教え込むことで、愛されるAIキャラクターを生み出せます。",
        monetization: "【AIカウンセラー / 占いbot開発】\n「愚痴聞きbot」や「メンタルケアAI」、あるいは「推し活用の恋人AI」など、感情的価値を提供するチャットボットを作成・公開しましょう。機能的な便利さではなく、「癒やし」や「寂しさの解消」にお金を払う層は巨大なマーケットです。",
    },
    CategoryProfile {
        category: Category::G,
        name: "叡智の賢者",
        alias: "Grand Sage",
        theme: Theme {
            accent: Rgb(234, 88, 12),
            gradient_from: Rgb(251, 146, 60),
            gradient_to: Rgb(245, 158, 11),
        },
        skill: "【統率魔法】AI導入支援 / 組織マネジメント",
        description: "人とAIを繋ぎ導く教育者",
        features_title: "教えること、シェアすることが好き",
        features: "物事を俯瞰して見るのが得意なリーダータイプ。自分一人で成果を出すよりも、チーム全体のレベルが上がることや、誰かに知識を教えて「ありがとう」と言われることに喜びを感じます。バランス感覚に優れ、調整役として重宝されます。",
        reason: "特定の技術に特化するより、「どのAIをどう使えば課題解決できるか」という全体設計（ディレクション）に向いています。AIアレルギーのある人たちに、わかりやすくAIの魅力を伝え、導入をサポートする架け橋としての役割は、今後最も需要が高まります。",
        monetization: "【AI研修講師 / コミュニティ運営】\n企業向けのAI導入研修や、初心者向けのAI活用セミナーを開催するのがベスト。技術的な詳細よりも「どう役立つか」を翻訳して伝える能力が高く評価されます。オンラインサロン運営など、人を集めて導くビジネスで大きな収益を上げられます。",
    },
];
