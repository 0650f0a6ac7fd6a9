pub(crate) struct Canned {
    pub response: &'static str,
    pub suggestions: [&'static str; 3],
}

pub(crate) struct Subject {
    pub key: &'static str,
    pub display_name: &'static str,
}

pub(crate) const SUBJECTS: &[Subject] = &[
    Subject { key: "jordan", display_name: "Michael Jordan" },
    Subject { key: "lebron", display_name: "LeBron James" },
    Subject { key: "kobe", display_name: "Kobe Bryant" },
    Subject { key: "magic", display_name: "Magic Johnson" },
    Subject { key: "bird", display_name: "Larry Bird" },
    Subject { key: "shaq", display_name: "Shaquille O'Neal" },
    Subject { key: "duncan", display_name: "Tim Duncan" },
    Subject { key: "kareem", display_name: "Kareem Abdul-Jabbar" },
    Subject { key: "wilt", display_name: "Wilt Chamberlain" },
    Subject { key: "russell", display_name: "Bill Russell" },
];

/// (alias, subject key). Full names of the seeded legends first, then short names.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("michael jordan", "jordan"),
    ("lebron james", "lebron"),
    ("kobe bryant", "kobe"),
    ("magic johnson", "magic"),
    ("larry bird", "bird"),
    ("shaquille o'neal", "shaq"),
    ("tim duncan", "duncan"),
    ("kareem abdul-jabbar", "kareem"),
    ("wilt chamberlain", "wilt"),
    ("bill russell", "russell"),
    ("jordan", "jordan"),
    ("lebron", "lebron"),
    ("kobe", "kobe"),
    ("magic", "magic"),
    ("bird", "bird"),
    ("shaq", "shaq"),
    ("duncan", "duncan"),
    ("kareem", "kareem"),
    ("wilt", "wilt"),
    ("russell", "russell"),
];

pub(crate) const STATS_KEYWORDS: &[&str] = &[
    "points", "ppg", "rebounds", "assists", "shooting", "efficiency", "stats", "averages",
];
pub(crate) const CAREER_KEYWORDS: &[&str] = &[
    "career", "achievements", "championships", "titles", "legacy", "impact", "rings",
];
pub(crate) const STYLE_KEYWORDS: &[&str] = &[
    "style", "playstyle", "skill", "technique", "approach", "game", "moves",
];
pub(crate) const CURRENT_KEYWORDS: &[&str] = &[
    "current", "today", "modern", "nowadays", "right now", "this season", "active players",
];
pub(crate) const COMPARISON_KEYWORDS: &[&str] = &["better", "best", "compare", "vs", "versus", "who"];

// Rivalries, matched in either order

pub(crate) struct RivalryRule {
    pub pair: (&'static str, &'static str),
    pub canned: Canned,
}

impl RivalryRule {
    pub fn matches(&self, first: &str, second: &str) -> bool {
        (self.pair.0 == first && self.pair.1 == second) || (self.pair.0 == second && self.pair.1 == first)
    }
}

pub(crate) const JORDAN_LEBRON_RIVALRY: &str = "Jordan vs LeBron is the defining debate of modern basketball! Jordan went a perfect 6-0 in the Finals with 6 Finals MVPs, 10 scoring titles and a 30.1 career scoring average, the highest in league history. LeBron counters with unmatched longevity, the all-time scoring record and elite numbers in every category: 27+ points, 7+ rebounds and 7+ assists per game across more than two decades. Jordan represents peak dominance; LeBron represents sustained all-around greatness. Which matters more to you: the height of the peak or the length of the run?";

pub(crate) const RIVALRIES: &[RivalryRule] = &[
    RivalryRule {
        pair: ("jordan", "lebron"),
        canned: Canned {
            response: JORDAN_LEBRON_RIVALRY,
            suggestions: [
                "Compare their Finals records",
                "Who had the better peak?",
                "How does longevity factor into greatness?",
            ],
        },
    },
    RivalryRule {
        pair: ("magic", "bird"),
        canned: Canned {
            response: "Magic vs Bird saved the NBA in the 1980s! Their rivalry started in the 1979 NCAA championship game and carried straight into the league, where Showtime Lakers met the blue-collar Celtics in three Finals. Magic won 5 titles and 3 MVPs with 11.2 assists per game; Bird won 3 titles and 3 straight MVPs while averaging 24.3 points and 10 rebounds. Two completely different players who made everyone around them better.",
            suggestions: [
                "Lakers vs Celtics in the 80s",
                "Who was the better passer?",
                "Bird's three straight MVPs",
            ],
        },
    },
    RivalryRule {
        pair: ("kobe", "shaq"),
        canned: Canned {
            response: "Shaq and Kobe were more partners than rivals, and together they were nearly unstoppable! The Lakers three-peated from 2000 to 2002 with Shaq as the most dominant force in the paint and a young Kobe as his perimeter closer. Shaq won all three Finals MVPs during that run, and their split in 2004 remains one of the great what-ifs in league history. Kobe went on to win two more titles on his own.",
            suggestions: [
                "The Lakers three-peat",
                "What if Shaq and Kobe stayed together?",
                "Shaq's Finals dominance",
            ],
        },
    },
    RivalryRule {
        pair: ("jordan", "kobe"),
        canned: Canned {
            response: "Kobe modeled his game on Jordan more than any player ever has! The footwork, the fadeaway, the competitiveness: the resemblance is uncanny. Jordan has the edge in efficiency, scoring titles and MVPs, with a perfect 6-0 Finals record. Kobe matched him in work ethic and produced moments like the 81-point game, finishing with 5 titles of his own. Jordan was the original; Kobe was the closest thing we have seen since.",
            suggestions: [
                "Kobe's Mamba Mentality",
                "Compare their fadeaway jumpers",
                "Jordan's six Finals runs",
            ],
        },
    },
    RivalryRule {
        pair: ("wilt", "russell"),
        canned: Canned {
            response: "Wilt vs Russell is the original NBA rivalry! Wilt owned the stat sheet with 30.1 points and 22.9 rebounds per game, a 100-point game and a 50-point scoring season. Russell owned the trophy case with 11 championships in 13 seasons, built on defense, rebounding and winning. Russell's Celtics beat Wilt's teams in 7 of their 8 playoff meetings, which is why this debate is really about individual numbers versus team success.",
            suggestions: [
                "Wilt's 100-point game",
                "How did Russell win 11 rings?",
                "Stats vs championships debate",
            ],
        },
    },
    RivalryRule {
        pair: ("kareem", "magic"),
        canned: Canned {
            response: "Kareem and Magic were the twin engines of Showtime! Magic arrived in 1979 and the pair won 5 championships together, with Magic running the break and Kareem's skyhook anchoring the half court. As a rookie Magic famously started at center for an injured Kareem in the clinching game of the 1980 Finals and scored 42. Kareem brought the consistency, Magic brought the spark.",
            suggestions: [
                "Kareem's unstoppable skyhook",
                "Magic's rookie Finals game",
                "The Showtime Lakers",
            ],
        },
    },
];

pub(crate) const MULTI_PLAYER_PAIR: &str = "Great comparison between {first} and {second}! These are two incredible players with different strengths. {first} and {second} each brought unique elements to the game that made them legendary. Their head-to-head matchups and different eras make for fascinating analysis. What specific aspects would you like to compare?";

pub(crate) const MULTI_PLAYER_MANY: &str = "Wow, discussing {count} legends at once! Each of these players brought something special to the NBA. Comparing multiple greats really shows the evolution of basketball and different paths to greatness. Which specific comparison interests you most?";

pub(crate) const MULTI_PLAYER_SUGGESTIONS: [&str; 3] = [
    "Compare different playing styles",
    "Greatest clutch performers",
    "Most complete players ever",
];

// Single player paragraphs by intent

pub(crate) struct PlayerRule {
    pub subject: &'static str,
    pub stats: &'static str,
    pub career: &'static str,
    pub style: &'static str,
    pub current: &'static str,
    pub general: &'static str,
    pub suggestions: [&'static str; 3],
}

pub(crate) const PLAYER_RULES: &[PlayerRule] = &[
    PlayerRule {
        subject: "jordan",
        stats: "Michael Jordan's numbers are staggering: 30.1 points per game, the highest career average in NBA history, along with 6.2 rebounds, 5.3 assists and 49.7% shooting. He led the league in scoring 10 times and added 2.3 steals per game on the other end.",
        career: "Michael Jordan's career is the gold standard: 6 championships, 6 Finals MVPs, 5 regular-season MVPs, 14 All-Star selections and a Defensive Player of the Year award. He never lost in the Finals and never needed a Game 7 to win one.",
        style: "Michael Jordan combined explosive athleticism with a relentless mid-range game. Early on he attacked the rim; later he perfected the turnaround fadeaway and became one of the most feared clutch shooters ever, all while guarding the other team's best perimeter player.",
        current: "Michael Jordan's influence on today's game is everywhere, from the fadeaway footwork modern wings study to the sneaker culture that defines players off the court. Every current superstar is still measured against his 6-0 Finals record.",
        general: "Michael Jordan is the benchmark for greatness in basketball. Scoring, defense, competitiveness and a perfect Finals record make his case hard to beat. What part of his game interests you most?",
        suggestions: [
            "What made Jordan clutch?",
            "Jordan vs LeBron comparison",
            "MJ's impact on basketball culture",
        ],
    },
    PlayerRule {
        subject: "lebron",
        stats: "LeBron James is a statistical outlier in every direction: 27.2 points, 7.5 rebounds and 7.3 assists per game on 50.6% shooting over more than 1,400 games. He is the NBA's all-time leading scorer and sits near the top of the all-time assists list as a forward.",
        career: "LeBron James has built a career unlike any other: 4 championships with 3 different franchises, 4 Finals MVPs, 4 regular-season MVPs, 19 All-Star selections and the all-time scoring record, with 10 Finals appearances along the way.",
        style: "LeBron James plays like a point guard in a power forward's body. His court vision, passing out of drives and transition power make him a matchup problem for every defense, and he has steadily added a reliable jumper and post game as his athleticism evolved.",
        current: "LeBron James is still producing at an All-NBA level after more than twenty seasons, something no player has ever done. His longevity has turned the conversation from whether he is great to how long anyone could possibly stay this good.",
        general: "LeBron James is one of the most complete players the game has ever seen. Scoring, passing, rebounding and two decades of elite play give him a unique place in the GOAT debate. What would you like to know about him?",
        suggestions: [
            "LeBron's longevity secrets",
            "King James' Finals record",
            "LeBron's all-around game",
        ],
    },
    PlayerRule {
        subject: "kobe",
        stats: "Kobe Bryant averaged 25.0 points, 5.2 rebounds and 4.7 assists over 1,346 games, won 2 scoring titles and scored 81 points in a single game, the second-highest total ever. He finished his career with 33,643 points, all with the Lakers.",
        career: "Kobe Bryant spent 20 seasons with the Lakers, won 5 championships, 2 Finals MVPs, an MVP award and made 18 All-Star teams. He is one of the few players to win titles both as a sidekick and as the undisputed leader.",
        style: "Kobe Bryant was a master of footwork and shot-making. Jab steps, pump fakes and turnaround jumpers made him nearly impossible to guard one-on-one, and his Mamba Mentality turned preparation itself into part of his legend.",
        current: "Kobe Bryant's Mamba Mentality lives on in today's players, many of whom grew up idolizing him. His approach to preparation and footwork is still taught to young guards, and his influence on the modern game remains enormous.",
        general: "Kobe Bryant was one of the fiercest competitors in NBA history. Five championships, 81 points in a game and a work ethic that became a philosophy. What aspect of Kobe's career would you like to explore?",
        suggestions: [
            "Kobe's Mamba Mentality",
            "Kobe vs Jordan similarities",
            "Black Mamba's work ethic",
        ],
    },
    PlayerRule {
        subject: "magic",
        stats: "Magic Johnson averaged 19.5 points, 7.2 rebounds and 11.2 assists per game, the highest assist average in NBA history. He shot 52.0% from the field and recorded triple-doubles at a rate few players have ever matched.",
        career: "Magic Johnson won 5 championships, 3 Finals MVPs and 3 regular-season MVPs in 13 seasons, all with the Lakers. He won a title and Finals MVP as a rookie and made 12 All-Star teams.",
        style: "Magic Johnson was a 6'9\" point guard who saw passing lanes no one else could. No-look passes, fast-break leadership and the ability to play all five positions made Showtime the most entertaining show in basketball.",
        current: "Magic Johnson paved the way for today's oversized playmakers. Every tall ball-handler running an offense owes something to the blueprint he created in the 1980s.",
        general: "Magic Johnson is the greatest point guard many fans have ever seen. Passing, leadership and winning defined his career. What would you like to know about Magic?",
        suggestions: [
            "Magic's rookie Finals performance",
            "Magic vs Bird rivalry",
            "Best passers of all time",
        ],
    },
    PlayerRule {
        subject: "bird",
        stats: "Larry Bird averaged 24.3 points, 10.0 rebounds and 6.3 assists per game while shooting 49.6% from the field and 88.6% from the free-throw line. He joined the 50-40-90 club twice, long before the three-pointer was common.",
        career: "Larry Bird won 3 championships, 2 Finals MVPs and 3 consecutive MVP awards from 1984 to 1986, all with the Celtics. He made 12 All-Star teams and won the Three-Point Contest three times.",
        style: "Larry Bird won with skill, vision and trash talk rather than athleticism. He was an elite shooter, a brilliant passer and one of the smartest team defenders of his era.",
        current: "Larry Bird's shooting and passing from the forward spot look like a preview of today's game. Many modern stretch forwards play a version of the style he made famous.",
        general: "Larry Bird is one of the greatest forwards in basketball history. Shooting, basketball IQ and fierce competitiveness defined Larry Legend. What would you like to know about him?",
        suggestions: [
            "Bird's three straight MVPs",
            "Bird vs Magic rivalry",
            "Best shooters of the 80s",
        ],
    },
    PlayerRule {
        subject: "shaq",
        stats: "Shaquille O'Neal averaged 23.7 points and 10.9 rebounds per game on 58.2% shooting across 1,207 games. He led the league in field-goal percentage 10 times and won 2 scoring titles as a center.",
        career: "Shaquille O'Neal won 4 championships, 3 Finals MVPs, the 2000 MVP award and made 15 All-Star teams across six franchises. His three straight Finals MVPs with the Lakers remain one of the most dominant runs ever.",
        style: "Shaquille O'Neal combined 325 pounds of power with surprising footwork and agility. Defenses had no answer in the post, which led to the Hack-a-Shaq strategy built around his free-throw shooting.",
        current: "Shaquille O'Neal's kind of interior dominance is rare in today's spacing-heavy game. Fans still wonder how a prime Shaq would handle modern small-ball lineups.",
        general: "Shaquille O'Neal was the most physically dominant player of his generation. Power, personality and four championships make him a true legend. What would you like to know about Shaq?",
        suggestions: [
            "Shaq's Finals dominance",
            "Most dominant centers ever",
            "Shaq and Kobe partnership",
        ],
    },
];

/// Used for subjects without a dedicated entry; `{name}` is replaced by the display name.
pub(crate) const GENERIC_PLAYER: PlayerRule = PlayerRule {
    subject: "",
    stats: "{name} was incredible statistically. Looking at their career numbers, they consistently dominated in multiple categories. Their efficiency and consistency over their career truly set them apart from their peers.",
    career: "{name} had an absolutely legendary career. Their combination of individual excellence, team success, and cultural impact makes them one of the all-time greats. The championships, MVPs, and memorable moments really tell the story.",
    style: "{name} had a playing style all their own. Their skill set, feel for the game and approach on both ends of the floor influenced the players who came after them.",
    current: "{name} still shapes how today's game is played and judged. Modern players and analysts continue to measure greatness against what they accomplished.",
    general: "{name} is definitely one of the NBA legends worth discussing! They brought a unique combination of skill, athleticism, and basketball IQ that made them special. What specific aspect of their game interests you most?",
    suggestions: [
        "Compare different playing styles",
        "Greatest clutch performers",
        "Most complete players ever",
    ],
};

// Topics without player mentions, in priority order

pub(crate) struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub canned: Canned,
}

pub(crate) struct TopicRule {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
    pub variants: &'static [KeywordRule],
    pub fallback: Canned,
}

pub(crate) const DEFAULT_RESPONSE: &str = "I love talking NBA! Whether it's about legendary players, epic games, statistical comparisons, or basketball strategy, there's always something fascinating to discuss. The NBA has such a rich history of incredible athletes and memorable moments. What aspect of basketball interests you most?";

pub(crate) const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        label: "current-era",
        triggers: CURRENT_KEYWORDS,
        variants: &[
            KeywordRule {
                keywords: &["record"],
                canned: Canned {
                    response: "Records keep falling in the modern era! LeBron passed Kareem to become the all-time leading scorer, three-point records are broken almost every season, and 50- and 60-point games happen far more often than they used to. Faster pace and better spacing have changed what is statistically possible.",
                    suggestions: [
                        "Which records will never be broken?",
                        "Kareem's scoring record",
                        "How the three-pointer changed scoring",
                    ],
                },
            },
            KeywordRule {
                keywords: &["championship", "title", "rings", "finals"],
                canned: Canned {
                    response: "Winning a championship today looks different than it did in past eras. Parity is higher, player movement is constant and no team has repeated in recent years the way the Bulls, Lakers or Celtics once did. That makes every modern title hard-earned and makes the old dynasties look even more impressive.",
                    suggestions: [
                        "Greatest dynasties in NBA history",
                        "Why are repeat champions rare now?",
                        "Russell's 11 championships",
                    ],
                },
            },
        ],
        fallback: Canned {
            response: "The current NBA is a golden age of skill! The MVP race is now dominated by international stars and do-everything big men, with players posting triple-doubles and 30-point averages that used to be once-a-decade feats. Comparing today's stars with the legends is harder than ever because the game itself has changed so much.",
            suggestions: [
                "How would legends fare today?",
                "Modern MVP standards",
                "Pace and spacing in the modern era",
            ],
        },
    },
    TopicRule {
        label: "comparison",
        triggers: COMPARISON_KEYWORDS,
        variants: &[],
        fallback: Canned {
            response: "NBA comparisons are always fascinating! When comparing legends, I like to consider multiple factors: statistical dominance, team success, era context, impact on the game, and cultural influence. Each great player excelled in different ways - some through raw numbers, others through intangibles like leadership and clutch performance. What specific comparison interests you?",
            suggestions: [
                "Who was more dominant: Shaq or Kareem?",
                "Compare Magic and Bird's rivalry",
                "LeBron vs Jordan debate",
            ],
        },
    },
    TopicRule {
        label: "stats",
        triggers: STATS_KEYWORDS,
        variants: &[],
        fallback: Canned {
            response: "NBA statistics tell incredible stories! The beauty of basketball stats is how they reveal different playing styles and eras. Points per game shows scoring ability, but efficiency metrics like true shooting percentage give deeper insight. Rebounds and assists show impact beyond scoring. Context matters too - pace of play, rule changes, and competition level all affect numbers.",
            suggestions: [
                "What makes a great shooting percentage?",
                "Why are rebounds important?",
                "Assist vs turnover ratio",
            ],
        },
    },
];

/// Matches whenever no topic in `TOPIC_RULES` does.
pub(crate) const GENERAL_TOPIC: TopicRule = TopicRule {
    label: "general",
    triggers: &[],
    variants: &[
        KeywordRule {
            keywords: &["goat", "greatest"],
            canned: Canned {
                response: "The GOAT debate is eternal! Different fans value different things - some prioritize championships, others focus on individual dominance, longevity, or cultural impact. Michael Jordan, LeBron James, Kareem Abdul-Jabbar, and others all have compelling cases. What factors do you think matter most in determining greatness?",
                suggestions: [
                    "Jordan vs LeBron for GOAT",
                    "Does Kareem get overlooked?",
                    "Championships vs individual stats",
                ],
            },
        },
        KeywordRule {
            keywords: &["era", "90s", "80s"],
            canned: Canned {
                response: "Different NBA eras had unique characteristics! The 80s featured fast-paced, physical play with legendary rivalries. The 90s saw the peak of individual superstars and global expansion. The 2000s brought defensive focus, while the modern era emphasizes spacing and analytics. Each era had its own style and legends.",
                suggestions: [
                    "What defined the 90s NBA?",
                    "Magic and Bird's 80s rivalry",
                    "Modern vs vintage basketball",
                ],
            },
        },
        KeywordRule {
            keywords: &["favorite", "favourite"],
            canned: Canned {
                response: "Everyone's favorite legend says something about what they love in basketball! Some fans gravitate to the pure scorers like Jordan and Kobe, others to the playmakers like Magic, and others to the dominant big men like Shaq and Wilt. Who is your favorite, and what drew you to their game?",
                suggestions: [
                    "Most entertaining players ever",
                    "Best highlight-reel dunkers",
                    "Underrated legends",
                ],
            },
        },
    ],
    fallback: Canned {
        response: DEFAULT_RESPONSE,
        suggestions: [
            "Tell me about the Dream Team",
            "What defined the 90s NBA?",
            "Modern vs vintage basketball",
        ],
    },
};
